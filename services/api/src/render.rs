use cities::describe::describe;
use cities::views::{CityPage, CityView, PageRenderer};

/// Path of the static contact page.
pub(crate) const TALK_PATH: &str = "/talk";

/// Minimal HTML rendering of city pages.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct HtmlPageRenderer;

impl PageRenderer for HtmlPageRenderer {
    fn render(&self, page: &CityPage) -> String {
        let mut body = String::new();
        body.push_str("<ul class=\"cities\">\n");
        for city in &page.cities {
            body.push_str(&format!("  <li>{}</li>\n", escape_html(&describe(city))));
        }
        body.push_str("</ul>\n");

        let intro = match page.criterion_label() {
            Some(label) => format!(
                "<p>Cities ranked by {} from worst to best.</p>\n",
                escape_html(label)
            ),
            None => "<p>Pick a ranking to find your dream city.</p>\n".to_string(),
        };

        document(&page.title, &format!("{intro}{body}"))
    }
}

pub(crate) fn not_found_page() -> String {
    document(
        "Not found",
        "<p>There is no such page. Try one of the rankings above.</p>\n",
    )
}

/// Message form. Delivering the message is not wired up, so the form only
/// collects input.
pub(crate) fn talk_page() -> String {
    document(
        "Talk to us",
        "<p>Know a dream city we are missing? Leave us a message.</p>\n\
         <form method=\"post\" action=\"/message\">\n  \
         <label for=\"name\">Your name</label>\n  \
         <input id=\"name\" name=\"name\" type=\"text\">\n  \
         <label for=\"message\">Message</label>\n  \
         <textarea id=\"message\" name=\"message\" rows=\"5\"></textarea>\n  \
         <button type=\"submit\">Send</button>\n\
         </form>\n",
    )
}

fn document(title: &str, content: &str) -> String {
    let title = escape_html(title);
    let mut nav = String::new();
    for view in CityView::ordered() {
        nav.push_str(&format!(
            "    <li><a href=\"{}\">{}</a></li>\n",
            view.path(),
            escape_html(&view.title())
        ));
    }
    nav.push_str(&format!("    <li><a href=\"{TALK_PATH}\">Talk</a></li>\n"));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <title>{title}</title>\n</head>\n<body>\n  <nav>\n  <ul>\n{nav}  </ul>\n  </nav>\n  \
         <h1>{title}</h1>\n{content}</body>\n</html>\n"
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
