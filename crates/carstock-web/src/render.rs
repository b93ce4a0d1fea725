//! HTML rendering for the stock page.
//!
//! Descriptions are user-supplied text, so everything interpolated into the
//! markup goes through [`escape`].

use carstock_core::Entry;

/// A one-line message shown above the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
  Info(String),
  Error(String),
}

impl Notice {
  fn class(&self) -> &'static str {
    match self {
      Notice::Info(_) => "notice",
      Notice::Error(_) => "notice error",
    }
  }

  fn text(&self) -> &str {
    match self {
      Notice::Info(t) | Notice::Error(t) => t,
    }
  }
}

/// Escape the five markup-significant characters.
pub fn escape(raw: &str) -> String { quick_xml::escape::escape(raw).into_owned() }

/// One `<li>` per entry, each with a remove button posting to
/// `/cars/{id}/delete`.
pub fn car_list(entries: &[Entry]) -> String {
  entries
    .iter()
    .map(|e| {
      format!(
        "<li>{desc} <form method=\"post\" action=\"/cars/{id}/delete\">\
         <button type=\"submit\">Remove</button></form></li>\n",
        desc = escape(&e.describe()),
        id = e.id,
      )
    })
    .collect()
}

/// The full page: notice, add-car form, and the current stock.
pub fn page(title: &str, entries: &[Entry], notice: Option<&Notice>) -> String {
  let title = escape(title);
  let notice = notice
    .map(|n| format!("<p class=\"{}\">{}</p>\n", n.class(), escape(n.text())))
    .unwrap_or_default();
  let items = car_list(entries);

  format!(
    r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
{notice}<form id="add-car-form" method="post" action="/cars">
<input id="make-input" name="make" placeholder="Make" required>
<input id="model-input" name="model" placeholder="Model" required>
<input id="year-input" name="year" type="number" placeholder="Year" required>
<button type="submit">Add car</button>
</form>
<ul id="car-list">
{items}</ul>
</body>
</html>
"#
  )
}
