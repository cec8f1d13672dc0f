//! Simple CLI that prints a page's meta tags as JSON.
//!
//! Usage:
//!   extract_meta <URL>    fetch the page and extract
//!   extract_meta -        read HTML from stdin

use rs_metatags::{extract_meta_tags, Extractor, MetaTag};
use std::env;
use std::io;
use std::process;

fn run(arg: &str) -> rs_metatags::Result<Vec<MetaTag>> {
    if arg == "-" {
        return extract_meta_tags(io::stdin().lock());
    }
    Extractor::new(None)?.extract(arg)
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let Some(arg) = env::args().nth(1) else {
        eprintln!("usage: extract_meta <URL | ->");
        process::exit(2);
    };

    match run(&arg) {
        Ok(tags) => println!("{}", serde_json::to_string_pretty(&tags).unwrap_or_default()),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
