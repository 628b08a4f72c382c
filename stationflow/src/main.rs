use clap::Parser;
use stationflow::app::StationFlowCliArguments;

fn main() {
    env_logger::init();
    let args = StationFlowCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running stationflow: {e}");
            std::process::exit(1);
        }
    }
}
