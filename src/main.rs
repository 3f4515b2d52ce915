// SPDX-License-Identifier: MPL-2.0
use grid_sentry::app::{self, paths, Flags};

const HELP: &str = "\
GridSentry - operator alert console

USAGE:
  grid_sentry [OPTIONS]

OPTIONS:
  --lang <LOCALE>      Force the UI locale (e.g. en-US, fr)
  --config-dir <DIR>   Read and write settings.toml under DIR
  --raise <KIND>       Raise one sample alert right after startup
                       (success, error, warning, info, grid, fraud)
  -h, --help           Print this help and exit
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        raise: args.opt_value_from_str("--raise").unwrap(),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
