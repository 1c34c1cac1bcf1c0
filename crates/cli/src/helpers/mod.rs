// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use cyclic_code::{CodeError, CodeResult, CyclicCode};
use cyclic_config::CyclicConfig;
use tracing::warn;

pub mod prompt;
pub mod telemetry;

/// Build the code described by the `code` section of the config
pub fn code_from_config(config: &CyclicConfig) -> Result<CyclicCode> {
    let (n, k, generator) = config.code.require()?;
    Ok(CyclicCode::parse(n, k, generator)?)
}

/// Cut a message down to `k` bits. Shorter messages are rejected.
pub fn fit_message(mut message: Vec<bool>, k: usize) -> CodeResult<Vec<bool>> {
    if message.len() < k {
        return Err(CodeError::MessageLength {
            expected: k,
            actual: message.len(),
        });
    }
    if message.len() > k {
        warn!(
            "Message has {} bits, only the first {} are encoded",
            message.len(),
            k
        );
        message.truncate(k);
    }
    Ok(message)
}
