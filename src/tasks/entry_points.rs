use crate::FailResult;
use crate::config::{Settings, YamlRead};
use crate::logging::GlobalLogger;

use clap::{App, Arg};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

// -------------------------------------------------------------------------------------

pub fn spgen_crystal() {
    wrap_result_main(|| {
        let matches = App::new("spgen-crystal")
            .version(crate_version!())
            .about("Generate the atoms of a crystal from its space group and basis.")
            .args(&[
                Arg::with_name("config")
                    .short("c").long("config").value_name("CONFIG")
                    .required(true).takes_value(true)
                    .help("crystal description (yaml)"),
                Arg::with_name("spacegroups")
                    .short("s").long("spacegroups").value_name("SPACEGROUPS")
                    .required(true).takes_value(true)
                    .help("symmetry table (yaml, or json if the extension is .json)"),
                Arg::with_name("output")
                    .short("o").long("output").value_name("OUTPUT")
                    .takes_value(true)
                    .help("output json file [default: stdout]"),
                Arg::with_name("verbose")
                    .short("v").long("verbose").multiple(true)
                    .help("log more"),
                Arg::with_name("log")
                    .long("log").value_name("FILE").takes_value(true)
                    .help("also write the log to this file"),
            ])
            .get_matches();

        let mut logger = GlobalLogger::default();
        logger.verbosity(matches.occurrences_of("verbose") as i32);
        if let Some(path) = matches.value_of_os("log") {
            logger.path(path);
        }
        logger.apply()?;

        // required args are guaranteed by clap
        let config_path = matches.value_of_os("config").unwrap_or_default();
        let table_path = matches.value_of_os("spacegroups").unwrap_or_default();

        let settings = {
            let file = File::open(config_path)
                .map_err(|e| format_err!("{}: {}", config_path.to_string_lossy(), e))?;
            Settings::from_reader(BufReader::new(file))?
        };
        let table = spgen_structure_io::spacegroups::load_path(table_path)?;

        let cell = crate::cmd::generate(&settings, &table)?;

        match matches.value_of_os("output") {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|e| format_err!("{}: {}", path.to_string_lossy(), e))?;
                spgen_structure_io::interchange::write_json(BufWriter::new(file), &cell)?;
                info!("Wrote {}", path.to_string_lossy());
            },
            None => {
                let stdout = io::stdout();
                spgen_structure_io::interchange::write_json(stdout.lock(), &cell)?;
            },
        }
        Ok(())
    });
}
