// SPDX-License-Identifier: MPL-2.0
use launchdeck::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        qa_indicator: args.contains("--qa"),
    };

    app::run(flags)
}
