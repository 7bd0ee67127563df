#![warn(trivial_casts)]
#![deny(unused)]
#![forbid(unused_extern_crates, unused_import_braces)]

use {
    std::{
        env,
        process
    },
    set_finder::{
        deck::read_card_list,
        process::process_cards,
        report::{
            output_filename,
            write_report,
            GroupBy
        },
        scryfall::{
            Client,
            ClientConfig
        },
        Error
    }
};

fn parse_args() -> Result<(String, GroupBy), Error> {
    let mut input_file = None;
    let mut group_by = GroupBy::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--group-by" {
            group_by = args.next().ok_or(Error::Usage)?.parse()?;
        } else if let Some(value) = arg.strip_prefix("--group-by=") {
            group_by = value.parse()?;
        } else if arg.starts_with("--") {
            return Err(Error::Usage);
        } else if input_file.is_none() {
            input_file = Some(arg);
        } else {
            return Err(Error::Usage);
        }
    }
    Ok((input_file.ok_or(Error::Usage)?, group_by))
}

fn run() -> Result<(), Error> {
    let (input_file, group_by) = parse_args()?;
    let output_file = output_filename(&input_file);
    println!("Reading cards from: {}", input_file);
    println!("Output will be written to: {}", output_file);
    println!("Grouping by: {}", group_by);
    println!();
    let card_names = read_card_list(&input_file)?;
    println!("Found {} cards to process", card_names.len());
    println!();
    let client = Client::new(ClientConfig::default())?;
    let results = process_cards(&client, &card_names);
    write_report(&output_file, &results, group_by)?;
    println!();
    println!("Processed {} cards", card_names.len());
    println!("Results written to: {}", output_file);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match run() {
        Ok(()) => {}
        Err(Error::Usage) => {
            eprintln!("usage: set-finder <deck-list> [--group-by card|set]");
            process::exit(2);
        }
        Err(e @ Error::UnknownGrouping(_)) => {
            eprintln!("[!!!!] {:?}", e);
            eprintln!("usage: set-finder <deck-list> [--group-by card|set]");
            process::exit(2);
        }
        Err(e) => {
            eprintln!("[!!!!] {:?}", e);
            process::exit(1);
        }
    }
}
