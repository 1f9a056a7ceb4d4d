use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Agencia de Autos" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="encabezado" {
                    a href="/" class="logo" { "Agencia de Autos" }
                    nav {
                        ul {
                            li { a href="/" { "Catálogo" } }
                            li { a href="/comparar" { "Comparar" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer class="pie" {
                    p { "Precios en pesos mexicanos (MXN). Sujetos a cambio sin previo aviso." }
                }
            }
        }
    }
}
