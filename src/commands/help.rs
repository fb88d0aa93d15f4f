pub const USAGE: &str = "\
📖 sparkline24 - synthetic 24h price sparklines

Usage:
  sparkline24 synth <price> <change%> [points]   Print the trajectory as a table
  sparkline24 json  <price> <change%> [points]   Print the render bundle as JSON
  sparkline24 svg   <price> <change%> [file]     Render an SVG sparkline
  sparkline24 png   <price> <change%> [file]     Render a PNG sparkline
  sparkline24 feed  <snapshots.json>             Render an SVG per feed snapshot
  sparkline24 help                               Show this help message

Environment:
  SPARKLINE_POINTS        points per trajectory (default 24)
  SPARKLINE_WIDTH/HEIGHT  canvas size in pixels (default 120x40)
  SPARKLINE_ABOVE_COLOR   fill above the 24h-ago price (default #16c784)
  SPARKLINE_BELOW_COLOR   fill below the 24h-ago price (default #ea3943)
  SPARKLINE_FILL_OPACITY  area opacity in [0, 1] (default 0.3)
  SPARKLINE_OUTPUT_DIR    where rendered files go (default .)
  RUST_LOG                log filter, e.g. sparkline24=debug";

pub fn execute() {
    println!("{}", USAGE);
}
