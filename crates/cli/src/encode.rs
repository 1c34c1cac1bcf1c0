// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::{code_from_config, fit_message};
use anyhow::Result;
use cyclic_code::utils::{bits_to_string, parse_bits};
use cyclic_code::CyclicCode;
use cyclic_config::CyclicConfig;
use serde::Serialize;
use tracing::info;

#[derive(Serialize, Debug, PartialEq)]
pub struct Encoded {
    pub message: String,
    pub codeword: String,
}

/// Parse, fit to k bits and encode a message
pub fn encode_message(code: &CyclicCode, message: &str) -> Result<Encoded> {
    let message = fit_message(parse_bits(message)?, code.k())?;
    let codeword = code.encode(&message)?;

    Ok(Encoded {
        message: bits_to_string(&message),
        codeword: bits_to_string(&codeword),
    })
}

pub fn execute(config: &CyclicConfig, message: &str) -> Result<()> {
    let code = code_from_config(config)?;
    let encoded = encode_message(&code, message)?;
    info!(message = %encoded.message, codeword = %encoded.codeword, "encoded");

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&encoded)?);
    } else {
        println!("{}", encoded.codeword);
    }

    Ok(())
}
