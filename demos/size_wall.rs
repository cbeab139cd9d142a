use std::env;

use wallfit::cabinet::find_preset;
use wallfit::grid::GridConfig;
use wallfit::{calculate, parse_aspect_ratio, Cabinet, CalcInput, ParamId, Unit, WallFitError};

/// Parse one `name=value` argument.
///
/// Return
/// ----------
/// * The parameter and its raw value; for `ar` the value is resolved to a ratio
///   through the presets first, then as a `W:H` or decimal ratio.
fn parse_param(arg: &str) -> Result<(ParamId, String, Option<f64>), WallFitError> {
    let (name, raw) = arg
        .split_once('=')
        .ok_or_else(|| WallFitError::InvalidParameter(arg.to_string()))?;
    let id: ParamId = name.parse()?;

    let ar = match id {
        ParamId::AspectRatio => Some(match find_preset(raw) {
            Some(preset) => preset.value,
            None => parse_aspect_ratio(raw)?,
        }),
        _ => None,
    };
    Ok((id, raw.to_string(), ar))
}

fn print_grid(side: &str, grid: &Option<GridConfig>, unit: Unit) {
    match grid {
        Some(grid) => {
            let (w, h, d) = grid.dimensions_in(unit);
            println!(
                "{side:>5}: {grid} ({} cabinets) {w:.2} x {h:.2} {unit}, diagonal {d:.2} {unit}, AR {:.3}",
                grid.total_cabinets, grid.aspect_ratio
            );
        }
        None => println!("{side:>5}: none"),
    }
}

/// Size a wall from the command line.
/// Usage:
///   size_wall <CABINET> <UNIT> <PARAM=VALUE> <PARAM=VALUE>
/// Example:
///   RUST_LOG=debug size_wall 16:9 in ar=16:9 height=100
fn main() -> Result<(), WallFitError> {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let [cabinet, unit, first, second] = args.as_slice() else {
        eprintln!("usage: size_wall <CABINET> <UNIT> <PARAM=VALUE> <PARAM=VALUE>");
        return Ok(());
    };

    let cabinet = Cabinet::from_catalog(cabinet)?;
    let unit: Unit = unit.parse()?;
    let (a, raw_a, ar_a) = parse_param(first)?;
    let (b, raw_b, ar_b) = parse_param(second)?;

    let mut input = CalcInput::new((a, b), cabinet, unit)
        .with_value(a, raw_a)
        .with_value(b, raw_b);
    input.ar_value = ar_a.or(ar_b);

    let result = calculate(&input);

    for error in &result.errors {
        println!("error: {error}");
    }
    for notice in &result.notices {
        println!("notice: {notice}");
    }
    if !result.has_errors() {
        print_grid("lower", &result.lower, unit);
        print_grid("upper", &result.upper, unit);
    }

    Ok(())
}
