use argh::FromArgs;

use unmatrix::css;

#[derive(FromArgs)]
/// Decompose a computed style transform into its transform functions
struct Args {
    /// the transform value, e.g. "matrix(0.866, 0.5, -0.5, 0.866, 10, 20)"
    #[argh(option, short = 't')]
    transform: String,

    /// print the decomposition as JSON instead of a transform list
    #[argh(switch)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let Some(result) = css::transform_from_css(&args.transform)? else {
        log::info!("{} has no decomposition", args.transform);
        println!("none");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", css::to_css(&result));
    }

    Ok(())
}
