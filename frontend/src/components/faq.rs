use yew::prelude::*;

use crate::content::FaqEntry;

/// Clicking the open entry closes it, clicking any other opens that one instead.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button type="button" class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <p class="faq-answer">{&props.entry.answer}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open_index = use_state(|| Some(0usize));

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let open_index = open_index.clone();
                    Callback::from(move |_: ()| {
                        open_index.set(toggle_open(*open_index, index));
                    })
                };
                html! {
                    <FaqItem
                        key={entry.question.clone()}
                        entry={entry.clone()}
                        is_open={*open_index == Some(index)}
                        on_toggle={on_toggle}
                    />
                }
            }) }

            <style>
                {r#"
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .faq-item {
                    border: 1px solid #F3E7E7;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.5);
                    padding: 0.75rem 1rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    padding: 0;
                    text-align: left;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #0B4F6C;
                    cursor: pointer;
                }

                .toggle-icon {
                    font-size: 1.125rem;
                    color: #783B5A;
                }

                .faq-answer {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: #514241;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<FaqEntry> {
        vec![
            FaqEntry {
                question: "Is it a physical book?".to_string(),
                answer: "No, it is a hyperlinked PDF.".to_string(),
            },
            FaqEntry {
                question: "Do I need ChatGPT Pro?".to_string(),
                answer: "The free version works.".to_string(),
            },
        ]
    }

    #[test]
    fn clicking_open_entry_closes_it() {
        assert_eq!(toggle_open(Some(0), 0), None);
    }

    #[test]
    fn only_one_entry_open_at_a_time() {
        assert_eq!(toggle_open(Some(0), 2), Some(2));
        assert_eq!(toggle_open(None, 1), Some(1));
    }

    #[tokio::test]
    async fn first_entry_starts_open() {
        let rendered = yew::LocalServerRenderer::<FaqAccordion>::with_props(FaqAccordionProps {
            entries: entries(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(rendered.contains("Is it a physical book?"));
        assert!(rendered.contains("Do I need ChatGPT Pro?"));
        assert!(rendered.contains("No, it is a hyperlinked PDF."));
        assert!(!rendered.contains("The free version works."));
        assert_eq!(rendered.matches("faq-item open").count(), 1);
    }
}
