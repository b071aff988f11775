// templates/components/icons.rs
//
// Inline stroke icons (24x24 viewBox, currentColor).

use crate::domain::content::Icon;
use maud::{html, Markup};

fn svg(class: &str, body: Markup) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=(class)
            aria-hidden="true"
        {
            (body)
        }
    }
}

pub fn icon(kind: Icon, class: &str) -> Markup {
    match kind {
        Icon::Eye => eye(class),
        Icon::Zap => svg(class, html! { polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" {} }),
        Icon::Target => svg(
            class,
            html! {
                circle cx="12" cy="12" r="10" {}
                circle cx="12" cy="12" r="6" {}
                circle cx="12" cy="12" r="2" {}
            },
        ),
        Icon::Users => svg(
            class,
            html! {
                path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" {}
                circle cx="9" cy="7" r="4" {}
                path d="M22 21v-2a4 4 0 0 0-3-3.87" {}
                path d="M16 3.13a4 4 0 0 1 0 7.75" {}
            },
        ),
        Icon::Search => search(class),
    }
}

pub fn shopping_bag(class: &str) -> Markup {
    svg(
        class,
        html! {
            path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" {}
            path d="M3 6h18" {}
            path d="M16 10a4 4 0 0 1-8 0" {}
        },
    )
}

pub fn search(class: &str) -> Markup {
    svg(
        class,
        html! {
            circle cx="11" cy="11" r="8" {}
            path d="m21 21-4.3-4.3" {}
        },
    )
}

pub fn eye(class: &str) -> Markup {
    svg(
        class,
        html! {
            path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" {}
            circle cx="12" cy="12" r="3" {}
        },
    )
}

pub fn arrow_right(class: &str) -> Markup {
    svg(
        class,
        html! {
            path d="M5 12h14" {}
            path d="m12 5 7 7-7 7" {}
        },
    )
}

pub fn chevron(open: bool, class: &str) -> Markup {
    let d = if open { "m18 15-6-6-6 6" } else { "m6 9 6 6 6-6" };
    svg(class, html! { path d=(d) {} })
}

pub fn menu(open: bool, class: &str) -> Markup {
    if open {
        svg(
            class,
            html! {
                path d="M18 6 6 18" {}
                path d="m6 6 12 12" {}
            },
        )
    } else {
        svg(
            class,
            html! {
                line x1="4" x2="20" y1="12" y2="12" {}
                line x1="4" x2="20" y1="6" y2="6" {}
                line x1="4" x2="20" y1="18" y2="18" {}
            },
        )
    }
}

pub fn clock(class: &str) -> Markup {
    svg(
        class,
        html! {
            circle cx="12" cy="12" r="10" {}
            polyline points="12 6 12 12 16 14" {}
        },
    )
}

pub fn star(filled: bool, class: &str) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill=(if filled { "currentColor" } else { "none" })
            stroke="currentColor"
            stroke-width="2"
            class=(class)
            aria-hidden="true"
        {
            polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" {}
        }
    }
}

pub fn alert(class: &str) -> Markup {
    svg(
        class,
        html! {
            circle cx="12" cy="12" r="10" {}
            line x1="12" x2="12" y1="8" y2="12" {}
            line x1="12" x2="12.01" y1="16" y2="16" {}
        },
    )
}

pub fn loader(class: &str) -> Markup {
    svg(class, html! { path d="M21 12a9 9 0 1 1-6.219-8.56" {} })
}

pub fn external_link(class: &str) -> Markup {
    svg(
        class,
        html! {
            path d="M15 3h6v6" {}
            path d="M10 14 21 3" {}
            path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" {}
        },
    )
}

pub fn priority(p: crate::domain::Priority, class: &str) -> Markup {
    use crate::domain::Priority;
    match p {
        Priority::Price => svg(
            class,
            html! {
                line x1="12" x2="12" y1="2" y2="22" {}
                path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6" {}
            },
        ),
        Priority::Reviews => star(false, class),
        Priority::Retailer => svg(
            class,
            html! { path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" {} },
        ),
        Priority::Offers => svg(
            class,
            html! {
                rect x="3" y="8" width="18" height="4" rx="1" {}
                path d="M12 8v13" {}
                path d="M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7" {}
                path d="M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5" {}
            },
        ),
    }
}
