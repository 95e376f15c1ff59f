//! CLI tool for rendering coordinates as Google Maps literals
//!
//! Usage:
//!   cargo run --bin render_geometry -- <operation> [options] <x,y> [<x,y> ...]
//!
//! One coordinate is a point, several are a line string. `polygon` (or
//! `--polygon`) closes them into a polygon ring.

use std::env;

use anyhow::{bail, Context};
use geo::{Coord, Geometry, LineString, Point, Polygon};
use serde_json::Value;

use gmaps_render::encoding;
use gmaps_render::maps::{self, DescribeOptions};
use gmaps_render::options::{OptionMap, RenderOptions};

struct Args {
    operation: String,
    api: u32,
    render: RenderOptions,
    options: OptionMap,
    precision: u32,
    polygon: bool,
    raw_points: bool,
    positional: Vec<String>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <operation> [options] <x,y> [<x,y> ...]", program);
    eprintln!();
    eprintln!("Operations:");
    eprintln!("  lat-lng | point | bounds | bounds-string | polyline | polygon | marker");
    eprintln!("  describe | box | encode | decode <text>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --api <n>              API version (default: 3)");
    eprintln!("  --encoded              Send paths as an encoded polyline");
    eprintln!("  --no-wrap              Disable antimeridian wrapping in LatLngs");
    eprintln!("  --escape <k1,k2>       Quote keys that are normally raw code");
    eprintln!("  --option <key=value>   Constructor option (value parsed as JSON if possible)");
    eprintln!("  --precision <n>        Digits for bounds-string (default: 10)");
    eprintln!("  --polygon              Treat the coordinates as a polygon ring");
    eprintln!("  --raw-points           describe: emit [x, y] pairs instead of encoded text");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} polygon 0,0 1,1 2.5,2.5 5,5", program);
    eprintln!("  {} marker --option map=map --option cursor=pointer 10,10.01", program);
    eprintln!("  {} decode '??_ibE_ibE'", program);
}

fn parse_args(raw: &[String]) -> anyhow::Result<Args> {
    let mut args = Args {
        operation: raw[1].clone(),
        api: 3,
        render: RenderOptions::default(),
        options: OptionMap::new(),
        precision: encoding::DEFAULT_URL_PRECISION,
        polygon: false,
        raw_points: false,
        positional: Vec::new(),
    };

    let mut i = 2;
    while i < raw.len() {
        match raw[i].as_str() {
            "--api" => {
                i += 1;
                let value = raw.get(i).context("--api needs a version")?;
                args.api = value.parse().with_context(|| format!("bad API version '{}'", value))?;
            }
            "--encoded" => args.render.encoded = true,
            "--no-wrap" => args.render.lat_lng.no_wrap = true,
            "--polygon" => args.polygon = true,
            "--raw-points" => args.raw_points = true,
            "--escape" => {
                i += 1;
                let value = raw.get(i).context("--escape needs a key list")?;
                args.render
                    .escape
                    .extend(value.split(',').filter(|k| !k.is_empty()).map(String::from));
            }
            "--option" => {
                i += 1;
                let value = raw.get(i).context("--option needs key=value")?;
                let (key, value) = value
                    .split_once('=')
                    .with_context(|| format!("expected key=value, got '{}'", value))?;
                let parsed = serde_json::from_str(value)
                    .unwrap_or_else(|_| Value::String(value.to_string()));
                args.options.insert(key.to_string(), parsed);
            }
            "--precision" => {
                i += 1;
                let value = raw.get(i).context("--precision needs a digit count")?;
                args.precision = value.parse().with_context(|| format!("bad precision '{}'", value))?;
            }
            other if other.starts_with("--") => bail!("unknown option '{}'", other),
            other => args.positional.push(other.to_string()),
        }
        i += 1;
    }

    Ok(args)
}

fn parse_coord(text: &str) -> anyhow::Result<Coord<f64>> {
    let (x, y) = text
        .split_once(',')
        .with_context(|| format!("expected x,y, got '{}'", text))?;
    Ok(Coord {
        x: x.trim().parse().with_context(|| format!("bad x in '{}'", text))?,
        y: y.trim().parse().with_context(|| format!("bad y in '{}'", text))?,
    })
}

fn build_geometry(coords: Vec<Coord<f64>>, polygon: bool) -> anyhow::Result<Geometry<f64>> {
    match coords.len() {
        0 => bail!("no coordinates given"),
        1 if !polygon => Ok(Point(coords[0]).into()),
        _ if polygon => Ok(Polygon::new(LineString::new(coords), vec![]).into()),
        _ => Ok(LineString::new(coords).into()),
    }
}

fn main() -> anyhow::Result<()> {
    let raw: Vec<String> = env::args().collect();
    let program = raw.first().map(String::as_str).unwrap_or("render_geometry");

    if raw.len() < 2 {
        print_usage(program);
        return Ok(());
    }

    let args = parse_args(&raw)?;

    if args.operation == "decode" {
        let text = args.positional.first().context("decode needs an encoded polyline")?;
        for coord in encoding::decode(text)? {
            println!("{},{}", coord.x, coord.y);
        }
        return Ok(());
    }

    let coords = args
        .positional
        .iter()
        .map(|c| parse_coord(c))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if args.operation == "encode" {
        println!("{}", encoding::encode(&coords)?);
        return Ok(());
    }

    let geometry = build_geometry(coords, args.polygon || args.operation == "polygon")?;
    maps::use_api(args.api)?;

    let lat_lng = &args.render.lat_lng;

    let output = match args.operation.as_str() {
        "lat-lng" => maps::lat_lng(&geometry, lat_lng)?.to_string(),
        "point" => maps::point(&geometry)?.to_string(),
        "bounds" => maps::lat_lng_bounds(&geometry, lat_lng)?.to_string(),
        "bounds-string" => maps::lat_lng_bounds_string(&geometry, args.precision)?.to_string(),
        "polyline" => maps::polyline(&geometry, &args.options, &args.render)?.to_string(),
        "polygon" => maps::polygon(&geometry, &args.options, &args.render)?.to_string(),
        "marker" => maps::marker(&geometry, &args.options, &args.render)?.to_string(),
        "describe" => {
            let options = DescribeOptions::new()
                .encoded(!args.raw_points)
                .style(args.options.clone());
            serde_json::to_string_pretty(&maps::describe(&geometry, &options)?)?
        }
        "box" => serde_json::to_string_pretty(&maps::lat_lon_box(&geometry)?)?,
        other => {
            print_usage(program);
            bail!("unknown operation '{}'", other);
        }
    };

    println!("{}", output);
    Ok(())
}
