// src/i18n.rs
//
// Static display strings, one bundle per locale.
use crate::core::Locale;

pub struct Strings {
    pub title: &'static str,
    pub subheading: &'static str,
    pub placeholder: &'static str,
    pub parse_button: &'static str,
    pub back_button: &'static str,
    pub no_links: &'static str,
    pub keyword_column: &'static str,
    pub link_column: &'static str,
    pub copy_button: &'static str,
    pub links_copied: &'static str,
    pub changelog_button: &'static str,
    pub changelog_title: &'static str,
    pub changelog_content: &'static str,
    pub close_button: &'static str,
    /// Label of the toggle, naming the language it switches *to*.
    pub language_toggle: &'static str,
    pub about_title: &'static str,
    pub about_content: &'static str,
    pub support_title: &'static str,
    pub support_content: &'static str,
    pub connect_title: &'static str,
    pub rights: &'static str,
}

pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
    }
}

static EN: Strings = Strings {
    title: "CrawlLab",
    subheading: "Find links for your keywords in seconds",
    placeholder: "Enter keywords separated by commas, e.g. cat, dog",
    parse_button: "Parse",
    back_button: "Back",
    no_links: "No links found.",
    keyword_column: "Keyword",
    link_column: "Link",
    copy_button: "Copy links",
    links_copied: "link(s) copied to clipboard",
    changelog_button: "Changelog",
    changelog_title: "Changelog 🚀",
    changelog_content: "\
v3.0.0
- Faster parsing server.
- Spanish translation of the whole page.
- Long links are shortened in the result list.

v2.0.0
- Several keywords at once, separated by commas.
- Changelog window.

v1.0.0
- First public release.",
    close_button: "Close",
    language_toggle: "Español",
    about_title: "What is CrawlLab?",
    about_content: "CrawlLab searches the web for each keyword you enter and collects \
the links it finds. Type one or more keywords, press Parse, and browse the results.",
    support_title: "Support the project",
    support_content: "CrawlLab is free. If it saves you time, a small donation keeps the \
parsing server running.",
    connect_title: "Connect",
    rights: "All rights reserved. Developer:",
};

static ES: Strings = Strings {
    title: "CrawlLab",
    subheading: "Encuentra enlaces para tus palabras clave en segundos",
    placeholder: "Escribe palabras clave separadas por comas, p. ej. gato, perro",
    parse_button: "Analizar",
    back_button: "Volver",
    no_links: "No se encontraron enlaces.",
    keyword_column: "Palabra clave",
    link_column: "Enlace",
    copy_button: "Copiar enlaces",
    links_copied: "enlace(s) copiados al portapapeles",
    changelog_button: "Novedades",
    changelog_title: "Novedades 🚀",
    changelog_content: "\
v3.0.0
- Servidor de análisis más rápido.
- Traducción al español de toda la página.
- Los enlaces largos se acortan en la lista de resultados.

v2.0.0
- Varias palabras clave a la vez, separadas por comas.
- Ventana de novedades.

v1.0.0
- Primera versión pública.",
    close_button: "Cerrar",
    language_toggle: "English",
    about_title: "¿Qué es CrawlLab?",
    about_content: "CrawlLab busca en la web cada palabra clave que introduces y reúne \
los enlaces que encuentra. Escribe una o varias palabras clave, pulsa Analizar y revisa los resultados.",
    support_title: "Apoya el proyecto",
    support_content: "CrawlLab es gratuito. Si te ahorra tiempo, una pequeña donación mantiene \
el servidor de análisis en marcha.",
    connect_title: "Contacto",
    rights: "Todos los derechos reservados. Desarrollador:",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(strings(Locale::En).language_toggle, "Español");
        assert_eq!(strings(Locale::Es).language_toggle, "English");
    }

    #[test]
    fn bundles_differ_where_it_matters() {
        let (en, es) = (strings(Locale::En), strings(Locale::Es));
        assert_ne!(en.parse_button, es.parse_button);
        assert_ne!(en.back_button, es.back_button);
        assert_ne!(en.no_links, es.no_links);
        assert_ne!(en.changelog_content, es.changelog_content);
    }

    #[test]
    fn no_bundle_has_empty_labels() {
        for locale in Locale::ALL {
            let t = strings(locale);
            for label in [t.title, t.placeholder, t.parse_button, t.back_button, t.no_links, t.close_button] {
                assert!(!label.trim().is_empty(), "{locale}: empty label");
            }
        }
    }
}
