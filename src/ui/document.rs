//! HTML document shell.

use leptos::prelude::*;

/// Complete HTML document with the token stylesheet inlined.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Document title="Research" stylesheet=tokens::registry().css_variables()>
///         <PageTemplate page=page />
///     </Document>
/// }
/// ```
#[component]
pub fn Document(
    /// Document title.
    #[prop(into)]
    title: String,
    /// CSS placed in a `<style>` element in the head.
    #[prop(optional, into)]
    stylesheet: String,
    /// Body content.
    children: Children,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <style inner_html=stylesheet></style>
            </head>

            <body class="min-h-screen bg-cream font-mono text-ink antialiased">
                {children()}
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let html = view! {
            <Document title="Research" stylesheet=":root { --font-mono: \"IBM Plex Mono\"; }">
                <main>"Body"</main>
            </Document>
        }
        .to_html();

        assert!(html.to_lowercase().contains("<!doctype html>"));
        assert!(html.contains("<title>Research</title>"));
        assert!(html.contains("--font-mono: \"IBM Plex Mono\";"));
        assert!(html.contains("<main>Body</main>"));
    }
}
