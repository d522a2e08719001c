use std::io::Read;

use regex::Regex;

use crate::cli::commands::*;
use crate::cli::error::CliError;
use crate::cli::output::*;
use crate::model::document::Document;
use crate::ops::query::{self, LineFilter};
use crate::ops::tag_index;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let doc = read_document(std::io::stdin())?;
    run(cli.command, &doc, cli.json)
}

/// Run a command against an already-parsed document
pub fn run(command: Commands, doc: &Document, json: bool) -> Result<(), CliError> {
    match command {
        Commands::Stats => cmd_stats(doc, json),
        Commands::List(args) => cmd_list(args, doc, json),
        Commands::Show(args) => cmd_show(args, doc, json),
        Commands::Tags => cmd_tags(doc, json),
        Commands::Search(args) => cmd_search(args, doc, json),
        Commands::Cat => cmd_cat(doc),
    }
}

/// Read and parse a whole document from a reader
pub fn read_document(mut reader: impl Read) -> Result<Document, CliError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    if source.is_empty() {
        eprintln!("warning: input is empty");
    }
    Ok(Document::parse(&source))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_stats(doc: &Document, json: bool) -> Result<(), CliError> {
    let counts = doc.counts();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(counts))?);
    } else {
        for line in format_stats(counts) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_list(args: ListArgs, doc: &Document, json: bool) -> Result<(), CliError> {
    let filter = LineFilter {
        kind: args.kind,
        tag: args.tag,
        pattern: None,
    };
    let lines = query::filter_lines(doc, &filter);

    if json {
        let out: Vec<LineJson> = lines.iter().map(|(n, l)| line_to_json(*n, l)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (number, line) in lines {
            println!("{}", format_line(number, line));
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, doc: &Document, json: bool) -> Result<(), CliError> {
    let line = doc.line(args.number).ok_or(CliError::LineOutOfRange {
        number: args.number,
        total: doc.len(),
    })?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&line_to_json(args.number, line))?
        );
    } else {
        for out in format_line_detail(args.number, line) {
            println!("{}", out);
        }
    }
    Ok(())
}

fn cmd_tags(doc: &Document, json: bool) -> Result<(), CliError> {
    let index = tag_index::build_tag_index(doc);
    if json {
        println!("{}", serde_json::to_string_pretty(&tag_index_to_json(&index))?);
    } else {
        for line in format_tag_index(&index) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_search(args: SearchArgs, doc: &Document, json: bool) -> Result<(), CliError> {
    let re = Regex::new(&args.pattern)?;
    let hits = query::search_titles(doc, &re, args.kind);

    if json {
        let out: Vec<SearchHitJson> = hits.iter().map(search_hit_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for hit in &hits {
            println!("{}", format_line(hit.number, hit.line));
        }
    }
    Ok(())
}

fn cmd_cat(doc: &Document) -> Result<(), CliError> {
    if !doc.is_empty() {
        println!("{}", doc);
    }
    Ok(())
}
