use std::env;
use std::process::ExitCode;

use anyhow::Result;
use log::info;

use tsv2xlsx::config::Config;
use tsv2xlsx::{console, convert, data};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let code = match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{:#}", err);
            ExitCode::FAILURE
        },
    };

    console::wait_enter();
    code
}

fn run(args: &[String]) -> Result<()> {
    let config = Config::from_args(args)?;

    let records = data::read_records(config.input_path())?;
    let conversion = convert::convert(&records, config.column_map())?;
    info!(
        "converted input, groups={}, rows={}",
        conversion.group_count(),
        conversion.task_rows().len()
    );

    for path in data::write_workbooks(&conversion, config.output_dir())? {
        println!("{}を出力しました", path.display());
    }

    Ok(())
}
