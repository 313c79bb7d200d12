use std::path::PathBuf;

use clap::Command;
use stitcher::StitchParams;

fn main() {
    let command = Command::new("stitcher")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Place repeating elements along an outline")
        .arg(
            clap::Arg::new("outline")
                .help("Path to the input outline file (JSON)")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("output")
                .help("Path to write the placement list (JSON)")
                .required(true)
                .index(2),
        )
        .arg(
            clap::Arg::new("spacing")
                .short('s')
                .long("spacing")
                .help("Target distance between placements")
                .value_parser(clap::value_parser!(f64))
                .default_value("100"),
        )
        .arg(
            clap::Arg::new("balance")
                .short('b')
                .long("balance")
                .help("Spread the leftover remainder over the whole outline")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("anchor")
                .long("anchor")
                .help("Anchor offset of the stamped element, as dx,dy"),
        )
        .arg(
            clap::Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .help("Set the level of verbosity")
                .action(clap::ArgAction::Count),
        );

    let args = command.get_matches();
    env_logger::Builder::new()
        .filter_level(match args.get_count("verbosity") {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let input_name = PathBuf::from(args.get_one::<String>("outline").unwrap());
    let output_name = PathBuf::from(args.get_one::<String>("output").unwrap());

    let anchor_offset = args.get_one::<String>("anchor").map(|value| {
        let (dx, dy) = value
            .split_once(',')
            .expect("Anchor offset must be of the form dx,dy");
        kurbo::Vec2::new(
            dx.trim().parse().expect("Bad anchor offset x component"),
            dy.trim().parse().expect("Bad anchor offset y component"),
        )
    });
    let params = StitchParams {
        spacing: *args.get_one::<f64>("spacing").unwrap(),
        balance: args.get_flag("balance"),
        anchor_offset,
    };

    log::info!("Loading {}", input_name.display());
    let buffered =
        std::io::BufReader::new(std::fs::File::open(&input_name).expect("Failed to open outline"));
    let outline: stitcher::Outline =
        serde_json::from_reader(buffered).expect("Failed to parse outline");

    let placements = stitcher::stitch(&outline, &params).expect("Failed to stitch outline");
    log::info!("Emitted {} placement(s)", placements.len());

    std::fs::write(
        &output_name,
        serde_json::to_string_pretty(&placements).expect("Failed to serialize placements"),
    )
    .expect("Failed to write output");
}
