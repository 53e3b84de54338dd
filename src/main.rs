use subparent::{run, utils, AggregateOptions, Args};

fn main() {
    let args = Args::parse_args();
    utils::setup_logging(args.verbose);

    let result = AggregateOptions::from_args(&args).and_then(|options| run(&options));

    match result {
        Ok(stats) => {
            if args.stats {
                eprint!("{}", stats.summary());
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
