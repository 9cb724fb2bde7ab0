// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nw list`: show the interface catalogue.

use anyhow::Result;
use serde::Serialize;

use crate::color;
use crate::output::{format_or_json, OutputFormat};

#[derive(Debug, Serialize)]
struct Listed {
    name: &'static str,
    summary: &'static str,
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let listed: Vec<Listed> = nw_tools::entries()
        .iter()
        .map(|e| Listed { name: e.name, summary: e.summary })
        .collect();
    format_or_json(format, &listed, || {
        let width = listed.iter().map(|l| l.name.len()).max().unwrap_or(0);
        for entry in &listed {
            let pad = " ".repeat(width - entry.name.len());
            println!("{}{pad}  {}", color::header(entry.name), color::muted(entry.summary));
        }
    })
}
