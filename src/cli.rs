// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::analytics::ChartKind;

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn as_of_arg() -> Arg {
    Arg::new("as-of")
        .long("as-of")
        .value_name("YYYY-MM-DD")
        .help("Reference date for month-over-month (defaults to today)")
}

pub fn build_cli() -> Command {
    Command::new("cashboard")
        .about("Dashboard analytics for personal-finance transaction snapshots")
        .version(clap::crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(Command::new("init").about("Create the local snapshot store"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("institution").long("institution").default_value(""))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .default_value("0")
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(Command::new("list"))
                .subcommand(Command::new("rm").arg(Arg::new("name").long("name").required(true))),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(Command::new("add").arg(Arg::new("name").long("name").required(true)))
                .subcommand(Command::new("list"))
                .subcommand(Command::new("rm").arg(Arg::new("name").long("name").required(true))),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["INFLOW", "OUTFLOW", "inflow", "outflow"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("source").long("source"))
                        .arg(Arg::new("destination").long("destination")),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .arg(Arg::new("month").long("month"))
                        .arg(Arg::new("account").long("account"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["INFLOW", "OUTFLOW", "inflow", "outflow"]),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("import")
                .about("Load records into the snapshot store")
                .subcommand(
                    Command::new("snapshot")
                        .about("Replace the store with a JSON snapshot {accounts, categories, transactions}")
                        .arg(Arg::new("path").long("path").required(true)),
                )
                .subcommand(
                    Command::new("transactions")
                        .about("Append transactions from CSV: date,type,amount,account,category,description")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(json_args(
            Command::new("chart")
                .about("Compute one dashboard chart")
                .arg(
                    Arg::new("name")
                        .required(true)
                        .value_parser(ChartKind::names()),
                )
                .arg(as_of_arg()),
        ))
        .subcommand(
            Command::new("dashboard")
                .about("Summarise the dashboard: balance, recent transactions, chart availability")
                .arg(as_of_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print every chart series as JSON"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write charts or the snapshot to a file")
                .subcommand(
                    Command::new("chart")
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .required(true)
                                .value_parser(ChartKind::names()),
                        )
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true))
                        .arg(as_of_arg()),
                )
                .subcommand(
                    Command::new("snapshot").arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Read and change settings")
                .subcommand(Command::new("get").arg(Arg::new("key").required(true)))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                )
                .subcommand(Command::new("list")),
        )
        .subcommand(Command::new("doctor").about("Report data-quality issues in the snapshot"))
}
