use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use freelancehub_admin::{
    app::{App, LaunchOptions},
    config::Config,
    state::navigation,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("freelancehub-admin")
        .version(crate_version!())
        .about("Terminal admin dashboard for the FreelanceHub marketplace")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("section")
                .short("s")
                .long("section")
                .value_name("ID")
                .help("Section to open on start")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Theme for this run")
                .takes_value(true),
        )
        .get_matches();

    if let Some(section) = matches.value_of("section") {
        if !navigation::is_section(section) {
            eprintln!(
                "Unknown section '{}', starting at '{}'. Sections: {}",
                section,
                navigation::DEFAULT_SECTION,
                navigation::section_ids().join(", ")
            );
        }
    }

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let options = LaunchOptions {
        start_section: matches.value_of("section").map(str::to_string),
        theme: matches.value_of("theme").map(str::to_string),
    };
    App::start(config, options).await
}
