use std::env;
use std::fs;
use std::path::PathBuf;

use flight::routes::builtin_cities;
use formats::topology::Topology;
use globe::GlobeScene;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "decode" => cmd_decode(args),
        "run" => cmd_run(args),
        _ => Err(usage()),
    }
}

fn cmd_decode(args: Vec<String>) -> Result<(), String> {
    // globe decode <topology.json> [--object NAME]
    if args.is_empty() {
        return Err(usage());
    }

    let path = PathBuf::from(&args[0]);
    let mut object: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--object" => {
                i += 1;
                if i >= args.len() {
                    return Err("--object requires a value".to_string());
                }
                object = Some(args[i].clone());
            }
            other => {
                return Err(format!("unknown arg: {other}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    let payload = fs::read_to_string(&path).map_err(|e| format!("read {path:?}: {e}"))?;
    let topology = Topology::from_json_str(&payload).map_err(|e| format!("parse: {e}"))?;
    info!(arcs = topology.arcs.len(), objects = topology.objects.len(), "parsed topology");

    let collection = match &object {
        Some(name) => topology.decode_object(name),
        None => topology.decode(),
    }
    .map_err(|e| format!("decode: {e}"))?;

    let mut rings = 0usize;
    let mut points = 0usize;
    for feature in &collection.features {
        for ring in feature.geometry.rings() {
            rings += 1;
            points += ring.len();
        }
    }

    println!(
        "{} features, {rings} rings, {points} points",
        collection.features.len()
    );
    Ok(())
}

fn cmd_run(args: Vec<String>) -> Result<(), String> {
    // globe run [topology.json] [--frames N] [--dt SECONDS] [--seed N]
    let mut topology_path: Option<PathBuf> = None;
    let mut frames: u64 = 600;
    let mut dt_s: f64 = 1.0 / 60.0;
    let mut seed: Option<u64> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => {
                i += 1;
                frames = parse_value(&args, i, "--frames")?;
            }
            "--dt" => {
                i += 1;
                dt_s = parse_value(&args, i, "--dt")?;
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_value(&args, i, "--seed")?);
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            _ => {
                topology_path = Some(PathBuf::from(&args[i]));
            }
        }
        i += 1;
    }

    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let cities = builtin_cities();
    let mut scene = GlobeScene::build(&cities, rng);
    info!(
        cities = cities.len(),
        routes = scene.routes.len(),
        "scene built"
    );

    // Borders are optional: a bad or missing document degrades to a globe
    // without that one layer.
    if let Some(path) = topology_path {
        let attached = fs::read_to_string(&path)
            .map_err(|e| format!("read {path:?}: {e}"))
            .and_then(|payload| {
                scene
                    .load_borders(&payload)
                    .map_err(|e| format!("decode {path:?}: {e}"))
            });
        match attached {
            Ok(()) => {
                let lines = scene.borders.as_ref().map_or(0, |b| b.lines.len());
                info!(lines, "borders attached");
            }
            Err(e) => warn!("continuing without borders: {e}"),
        }
    }

    let mut launches = 0u64;
    let mut was_active = vec![false; scene.impulses.len()];
    for _ in 0..frames {
        scene.advance(dt_s);
        for (impulse, was) in scene.impulses.impulses().iter().zip(&mut was_active) {
            let is = impulse.is_active();
            if is && !*was {
                launches += 1;
            }
            *was = is;
        }
    }

    let frame = scene.frame();
    println!(
        "{} frames ({:.2}s simulated), {} routes, {launches} impulse launches, {} active at exit",
        frame.index,
        frame.time.0,
        scene.routes.len(),
        scene.impulses.active_count()
    );
    Ok(())
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    let raw = args
        .get(i)
        .ok_or_else(|| format!("{flag} requires a value"))?;
    raw.parse()
        .map_err(|e| format!("{flag}: invalid value {raw:?}: {e}"))
}

fn usage() -> String {
    [
        "usage:",
        "  globe decode <topology.json> [--object NAME]",
        "  globe run [topology.json] [--frames N] [--dt SECONDS] [--seed N]",
    ]
    .join("\n")
}
