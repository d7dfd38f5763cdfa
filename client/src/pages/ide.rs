//! Online IDE: a plain code editor that sends code to the judge's run
//! endpoint and shows the result in a console pane.

#[cfg(test)]
#[path = "ide_test.rs"]
mod ide_test;

use leptos::prelude::*;

use crate::net::api::RunError;
use crate::net::types::RunOutcome;
use crate::state::ui::UiState;
use crate::util::i18n::Translations;

/// Languages the run endpoint accepts, as `(wire name, label)`.
pub const RUN_LANGUAGES: [(&str, &str); 3] = [("javascript", "JavaScript"), ("python", "Python"), ("java", "Java")];

/// Editor contents when switching to `language`.
#[must_use]
pub fn starter_code(language: &str) -> &'static str {
    match language {
        "python" => "# Welcome to the online IDE\nprint(\"Hello, World!\")\n\ndef add(a, b):\n    return a + b\n\nprint(add(2, 3))\n",
        "java" => concat!(
            "public class Main {\n",
            "    public static void main(String[] args) {\n",
            "        System.out.println(\"Hello, World!\");\n",
            "        System.out.println(add(2, 3));\n",
            "    }\n\n",
            "    static int add(int a, int b) {\n",
            "        return a + b;\n",
            "    }\n",
            "}\n",
        ),
        _ => "// Welcome to the online IDE\nconsole.log(\"Hello, World!\");\n\nfunction add(a, b) {\n  return a + b;\n}\n\nconsole.log(add(2, 3));\n",
    }
}

/// What the console pane currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Console {
    #[default]
    Empty,
    Running,
    Finished(Result<RunOutcome, RunError>),
}

/// Console text and whether it should be styled as an error.
#[must_use]
pub fn console_text(console: &Console, t: &Translations) -> (String, bool) {
    match console {
        Console::Empty => (t.ide.waiting.to_owned(), false),
        Console::Running => (t.ide.running.to_owned(), false),
        Console::Finished(Ok(RunOutcome::Output(out))) if out.is_empty() => (t.ide.no_output.to_owned(), false),
        Console::Finished(Ok(RunOutcome::Output(out))) => (out.clone(), false),
        Console::Finished(Ok(RunOutcome::Failed(msg))) => (format!("{}{msg}", t.ide.error_prefix), true),
        Console::Finished(Err(e)) => (format!("{}{e}", t.ide.error_prefix), true),
    }
}

#[component]
pub fn IdePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move || ui.get().t();

    let language = RwSignal::new(RUN_LANGUAGES[0].0.to_owned());
    let code = RwSignal::new(starter_code(RUN_LANGUAGES[0].0).to_owned());
    let console = RwSignal::new(Console::Empty);
    let running = move || console.with(|c| matches!(c, Console::Running));

    let on_language = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        // Only replace untouched starter code.
        if code.get_untracked() == starter_code(&language.get_untracked()) {
            code.set(starter_code(&next).to_owned());
        }
        language.set(next);
    };

    let on_run = move |_| {
        if running() {
            return;
        }
        console.set(Console::Running);
        let source = code.get_untracked();
        let lang = language.get_untracked();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::run_code(&source, &lang).await;
            if let Err(e) = &result {
                leptos::logging::warn!("run failed: {e}");
            }
            console.set(Console::Finished(result));
        });
    };

    let view_console = move || console.with(|c| console_text(c, t()));

    view! {
        <main class="ide-page">
            <div class="ide-toolbar">
                <h2 class="ide-title">{move || t().ide.heading}</h2>
                <select class="ide-language" prop:value=move || language.get() on:change=on_language>
                    {RUN_LANGUAGES
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <button class="ide-run" on:click=on_run disabled=move || running()>
                    {move || if running() { t().ide.running } else { t().ide.run }}
                </button>
                <button class="ide-clear" on:click=move |_| console.set(Console::Empty) disabled=move || running()>
                    {move || t().ide.clear}
                </button>
            </div>
            <div class="ide-body">
                <textarea
                    class="ide-editor"
                    spellcheck="false"
                    aria-label=move || t().ide.editor
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                ></textarea>
                <section class="ide-console" aria-label=move || t().ide.console>
                    <pre class=move || {
                        if view_console().1 { "ide-console__text ide-console__text--error" } else { "ide-console__text" }
                    }>{move || view_console().0}</pre>
                </section>
            </div>
        </main>
    }
}
