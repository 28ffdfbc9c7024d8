use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ConvertCommand,
};
use anyhow::{anyhow, Result};
use aspgv::{
    convert::{Conversion, ConversionOptions, Converter, GraphSource, OutputPaths},
    layout::LayoutKind,
};
use clap::{Arg, ArgMatches};
use lazy_static::lazy_static;
use log::{info, warn};
use std::str::FromStr;
use strum::IntoEnumIterator;

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Converts ASP solver and grounder outputs into graph visualization JSON files.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ConvertCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_EDGE_PRED: &str = "EDGE_PRED";
pub(crate) const ARG_CLASP_OUT: &str = "CLASP_OUT";
pub(crate) const ARG_COST_PRED: &str = "COST_PRED";
pub(crate) const ARG_GRINGO_OUT: &str = "GRINGO_OUT";
pub(crate) const ARG_DIRECTED: &str = "DIRECTED";
pub(crate) const ARG_NOT_OPT: &str = "NOT_OPT";
pub(crate) const ARG_NOT_TIMESTAMPED: &str = "NOT_TIMESTAMPED";
pub(crate) const ARG_LAYOUT: &str = "LAYOUT";

lazy_static! {
    static ref LAYOUT_NAMES: Vec<&'static str> =
        LayoutKind::iter().map(<&'static str>::from).collect();
}

pub(crate) fn input_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_EDGE_PRED)
            .short("e")
            .long("edge-pred")
            .empty_values(false)
            .multiple(false)
            .help("the predicate of the edges chosen by the solutions")
            .required(true),
        Arg::with_name(ARG_CLASP_OUT)
            .short("c")
            .long("clasp-out")
            .empty_values(false)
            .multiple(false)
            .help("the file containing the solver output")
            .required(true),
        Arg::with_name(ARG_COST_PRED)
            .short("o")
            .long("cost-pred")
            .empty_values(false)
            .multiple(false)
            .requires(ARG_GRINGO_OUT)
            .help("the predicate of the edge costs (the complete graph is used if not set)")
            .required(false),
        Arg::with_name(ARG_GRINGO_OUT)
            .short("g")
            .long("gringo-out")
            .empty_values(false)
            .multiple(false)
            .requires(ARG_COST_PRED)
            .help("the file containing the grounder text output")
            .required(false),
        Arg::with_name(ARG_DIRECTED)
            .short("i")
            .long("directed")
            .takes_value(false)
            .help("considers the graph as directed (only relevant with cost facts)"),
        Arg::with_name(ARG_NOT_OPT)
            .long("not-opt")
            .takes_value(false)
            .help("the solver output does not come from an optimization"),
        Arg::with_name(ARG_NOT_TIMESTAMPED)
            .long("not-timestamped")
            .takes_value(false)
            .help("the solver output lines do not begin with timestamps"),
        Arg::with_name(ARG_LAYOUT)
            .long("layout")
            .empty_values(false)
            .multiple(false)
            .possible_values(&LAYOUT_NAMES)
            .default_value(LayoutKind::default().into())
            .help("the layout used to place the nodes"),
    ]
}

pub(crate) const ARG_JSON_DATA: &str = "JSON_DATA";
pub(crate) const ARG_JSON_TIME: &str = "JSON_TIME";
pub(crate) const ARG_JSON_SOLN: &str = "JSON_SOLN";

pub(crate) fn output_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_JSON_DATA)
            .short("d")
            .long("json-data")
            .empty_values(false)
            .multiple(false)
            .help("the output file for the graph document")
            .required(true),
        Arg::with_name(ARG_JSON_TIME)
            .short("t")
            .long("json-time")
            .empty_values(false)
            .multiple(false)
            .help("the output file for the timing document")
            .required(true),
        Arg::with_name(ARG_JSON_SOLN)
            .short("s")
            .long("json-soln")
            .empty_values(false)
            .multiple(false)
            .help("the output file for the solution document")
            .required(true),
    ]
}

pub(crate) fn conversion_options(arg_matches: &ArgMatches<'_>) -> Result<ConversionOptions> {
    let layout = match arg_matches.value_of(ARG_LAYOUT) {
        Some(l) => LayoutKind::from_str(l).map_err(|e| anyhow!(r#"unknown layout "{}": {}"#, l, e))?,
        None => LayoutKind::default(),
    };
    Ok(ConversionOptions::new(
        arg_matches.value_of(ARG_EDGE_PRED).unwrap(),
        arg_matches.value_of(ARG_CLASP_OUT).unwrap(),
    )
    .timestamped(!arg_matches.is_present(ARG_NOT_TIMESTAMPED))
    .optimizing(!arg_matches.is_present(ARG_NOT_OPT))
    .with_cost_predicate(arg_matches.value_of(ARG_COST_PRED))
    .with_grounder_output(arg_matches.value_of(ARG_GRINGO_OUT))
    .directed(arg_matches.is_present(ARG_DIRECTED))
    .with_layout(layout))
}

pub(crate) fn output_paths(arg_matches: &ArgMatches<'_>) -> OutputPaths {
    OutputPaths::new(
        arg_matches.value_of(ARG_JSON_DATA).unwrap(),
        arg_matches.value_of(ARG_JSON_TIME).unwrap(),
        arg_matches.value_of(ARG_JSON_SOLN).unwrap(),
    )
}

pub(crate) fn create_converter(options: ConversionOptions) -> Converter {
    let mut converter = Converter::new(options);
    converter.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    converter
}

pub(crate) fn log_conversion(conversion: &Conversion) {
    let graph = conversion.built_graph();
    let source = match conversion.graph_source() {
        GraphSource::Costs => "cost facts",
        GraphSource::CompleteGraph => "complete graph",
    };
    info!(
        "the graph ({}) has {} node(s) and {} edge(s) ({} two-way, {} one-way)",
        source,
        graph.nodes().len(),
        graph.edges().len(),
        graph.n_two_way_edges(),
        graph.n_one_way_edges(),
    );
    match conversion.answers().last() {
        Some(a) => info!(
            "{} answer(s); the last one is answer {} with optimization {} at {}s",
            conversion.timing_document().len(),
            a.index(),
            a.optimization(),
            a.elapsed_time()
        ),
        None => info!("no answer found"),
    }
}
