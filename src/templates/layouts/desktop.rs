use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "/static/htmx.js";

/// Document shell shared by every full page.
pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="WisePick: see reviews, see prices, decide smarter.";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {}
            }
            body {
                (content)
            }
        }
    }
}
