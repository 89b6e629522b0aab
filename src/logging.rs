// SPDX-License-Identifier: MPL-2.0
// SPDX-FileCopyrightText: 2021 The vanadinite developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License,
// v. 2.0. If a copy of the MPL was not distributed with this file, You can
// obtain one at https://mozilla.org/MPL/2.0/.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags onto a default filter level
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Sends logs to stderr so stdout only ever carries the decoded indices.
/// `RUST_LOG` takes precedence over `verbosity` when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder().with_default_directive(level_for(verbosity).into()).from_env_lossy();

    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).without_time().try_init();
}
