// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::code_from_config;
use anyhow::Result;
use cyclic_code::utils::format_matrix;
use cyclic_code::{verify_parity_matrix, CyclicCode};
use cyclic_config::CyclicConfig;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct CodeReport {
    pub n: usize,
    pub k: usize,
    pub generator_polynomial: String,
    pub parity_polynomial: String,
    pub generator_matrix: Vec<Vec<u8>>,
    pub parity_check_matrix: Vec<Vec<u8>>,
}

impl CodeReport {
    /// Fails if G · H^T has a non-zero entry.
    pub fn new(code: &CyclicCode) -> Result<Self> {
        verify_parity_matrix(code.generator_matrix(), code.parity_check_matrix())?;

        Ok(Self {
            n: code.n(),
            k: code.k(),
            generator_polynomial: code.generator_polynomial().to_string(),
            parity_polynomial: code.parity_polynomial().to_string(),
            generator_matrix: code.generator_matrix().to_u8_rows(),
            parity_check_matrix: code.parity_check_matrix().to_u8_rows(),
        })
    }
}

/// Text rendering shared with the interactive session
pub fn render_report(code: &CyclicCode) -> Result<String> {
    let report = CodeReport::new(code)?;

    let mut out = format!(
        "Cyclic code ({}, {})\ng(x) = {}\nh(x) = {}\n\n",
        report.n, report.k, report.generator_polynomial, report.parity_polynomial
    );
    out.push_str(&format_matrix("G", code.generator_matrix()));
    out.push('\n');
    out.push_str(&format_matrix("H", code.parity_check_matrix()));
    out.push('\n');
    out.push_str("G * H^T = 0 (mod 2): verified\n");

    Ok(out)
}

pub fn execute(config: &CyclicConfig) -> Result<()> {
    let code = code_from_config(config)?;

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&CodeReport::new(&code)?)?);
    } else {
        print!("{}", render_report(&code)?);
    }

    Ok(())
}
