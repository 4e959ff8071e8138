pub fn execute() -> String {
    [
        "pricecast - predicted vs actual closing prices",
        "",
        "Data",
        "  load <stock> [range]     Fetch a prediction (range: 1M, 3M, 6M, 1y, 2y, all)",
        "  open <file.json> [range] Load a saved prediction or a list of points",
        "  news [stock]             News sentiment summary",
        "  health                   Check the prediction service",
        "",
        "Navigation",
        "  prev | next              Page the 4-month window",
        "  click <MM/DD/YYYY>       Zoom on the week around a date; click again to leave zoom",
        "",
        "Output",
        "  show                     Table of the visible points",
        "  months                   Months in the series (* = in the current window)",
        "  render [path]            Save the current view as a PNG chart",
        "",
        "  help | quit",
    ]
    .join("\n")
}
