use narwhal::graphlib::Graph;
use narwhal::mst::{self, SpanningTree};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(narwhal::graphlib::Error),
    Mst(mst::Error),
    Json(serde_json::Error),
    Parse { line: usize, message: String },
    UnknownRoot(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Mst(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Parse { line, message } => write!(f, "line {line}: {message}"),
            CliError::UnknownRoot(name) => write!(f, "no vertex named {name:?} in the input"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<narwhal::graphlib::Error> for CliError {
    fn from(value: narwhal::graphlib::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<mst::Error> for CliError {
    fn from(value: mst::Error) -> Self {
        Self::Mst(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Span,
    Graph,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    root: Option<String>,
    json: bool,
    pretty: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "narwhal-cli\n\
\n\
USAGE:\n\
  narwhal-cli [span] [--root <name>] [--json] [--pretty] [--out <path>] [<path>|-]\n\
  narwhal-cli graph [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - The first input line is a vertex count n; vertices \"0\"..\"n\" are created.\n\
  - Every following line is one undirected edge: `<vertex> <vertex> <weight>`.\n\
  - span reports the minimum spanning tree from --root (default \"1\").\n\
  - --json prints the full per-vertex result instead of the text report.\n\
  - graph prints the adjacency listing without computing anything.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "span" => args.command = Command::Span,
            "graph" => args.command = Command::Graph,
            "--root" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.root = Some(name.clone());
            }
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

/// Build the graph from the line format: a vertex count, then one undirected
/// edge per line.
fn read_network(text: &str) -> Result<Graph, CliError> {
    let mut lines = text.lines().enumerate();
    let Some((_, first)) = lines.next() else {
        return Err(CliError::Parse {
            line: 1,
            message: "empty input, expected a vertex count".to_string(),
        });
    };

    let mut g = Graph::new();
    create_vertices(&mut g, first)?;
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        create_edge(&mut g, idx + 1, line)?;
    }
    tracing::debug!(
        vertices = g.vertex_count(),
        arcs = g.edge_count(),
        "network ingested"
    );
    Ok(g)
}

fn create_vertices(g: &mut Graph, line: &str) -> Result<(), CliError> {
    let raw = line.split_whitespace().next().unwrap_or("");
    let count: usize = raw.parse().map_err(|_| CliError::Parse {
        line: 1,
        message: format!("invalid vertex count {raw:?}"),
    })?;
    // The format is 1-indexed with a stated count; vertex "0" exists but
    // never carries edges.
    for i in 0..=count {
        g.add(i.to_string());
    }
    Ok(())
}

fn create_edge(g: &mut Graph, line_no: usize, line: &str) -> Result<(), CliError> {
    let mut fields = line.split_whitespace();
    let (Some(v), Some(w), Some(raw)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(CliError::Parse {
            line: line_no,
            message: "expected `<vertex> <vertex> <weight>`".to_string(),
        });
    };
    let weight = raw.parse().map_err(|_| CliError::Parse {
        line: line_no,
        message: format!("invalid edge weight {raw:?}"),
    })?;
    g.add_undirected_edge(v, w, weight)?;
    Ok(())
}

/// One line per vertex from id 2 up: `<predecessor> <name> <weight>`, then
/// the total. Ids 0 and 1 are the input format's dummy vertex and
/// conventional root, so the listing starts above them.
fn text_report(g: &Graph, tree: &SpanningTree) -> String {
    let mut out = String::new();
    for id in 2..g.vertex_count() {
        if id == tree.root() {
            continue;
        }
        let name = g.vertex(id).map(|v| v.name()).unwrap_or("?");
        match (tree.predecessor(id), tree.connect_weight(id)) {
            (Some(pred), Some(weight)) => {
                out.push_str(&format!("{pred} {name} {weight}\n"));
            }
            _ => {
                out.push_str(&format!("- {name} unreachable\n"));
            }
        }
    }
    out.push_str(&format!("total {}\n", tree.total_weight()));
    out
}

fn adjacency_listing(g: &Graph) -> String {
    let mut out = String::new();
    for v in g.vertices() {
        out.push_str(&format!("{} {}\n", v.id(), v.name()));
        for (w, weight) in v.edges() {
            let name = g.vertex(w).map(|x| x.name()).unwrap_or("?");
            out.push_str(&format!("  -> {name} {weight}\n"));
        }
    }
    out
}

#[derive(Serialize)]
struct VertexOut<'a> {
    id: usize,
    name: &'a str,
    predecessor: Option<usize>,
    weight: Option<u32>,
}

#[derive(Serialize)]
struct SpanOut<'a> {
    root: usize,
    total_weight: u64,
    vertices: Vec<VertexOut<'a>>,
}

fn span_out<'a>(g: &'a Graph, tree: &SpanningTree) -> SpanOut<'a> {
    let vertices = g
        .vertices()
        .map(|v| VertexOut {
            id: v.id(),
            name: v.name(),
            predecessor: tree.predecessor(v.id()),
            weight: tree.connect_weight(v.id()),
        })
        .collect();
    SpanOut {
        root: tree.root(),
        total_weight: tree.total_weight(),
        vertices,
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    write_text(&text, out)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let graph = read_network(&text)?;

    match args.command {
        Command::Graph => write_text(&adjacency_listing(&graph), args.out.as_deref()),
        Command::Span => {
            let root_name = args.root.as_deref().unwrap_or("1");
            let Some(root) = graph.vertex_id(root_name) else {
                return Err(CliError::UnknownRoot(root_name.to_string()));
            };
            let tree = mst::prim(&graph, root)?;
            if args.json {
                write_json(&span_out(&graph, &tree), args.pretty, args.out.as_deref())
            } else {
                write_text(&text_report(&graph, &tree), args.out.as_deref())
            }
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::UnknownRoot(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
