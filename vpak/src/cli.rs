use clap;

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    clap::App::new("vpak")
        .version(clap::crate_version!())
        .about("Package selected entries of a virtual filesystem into a zip archive")
        .arg(
            clap::Arg::from_usage("-i, --input <input> 'Root directory exposing the virtual filesystem'")
                .required(true),
        )
        .arg(
            clap::Arg::from_usage("-o, --output <output> 'Output zip file'")
                .required(true),
        )
        .arg(
            clap::Arg::from_usage("-r, --rules [rules] 'Selection list file (defaults to the built-in list)'"),
        )
        .arg(clap::Arg::from_usage(
            "-f, --force 'Overwrite the output file without asking'",
        ))
        .arg(clap::Arg::from_usage(
            "-n, --no-clobber 'Never overwrite an existing output file'",
        ))
        .arg(clap::Arg::from_usage(
            "-w, --wait 'Wait for the forensic progress file to report 100% before packaging'",
        ))
        .arg(clap::Arg::from_usage("-d, --debug 'Enable debug output'"))
        .get_matches()
}
