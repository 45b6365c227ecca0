use yew::prelude::*;

use crate::components::button::{BackLink, CtaButton};
use crate::config::CONTACT_EMAIL;
use crate::page::{use_page_nav, PageId};

/// Enquiry form. Submitting hands the fields to the visitor's mail client
/// addressed to the studio; nothing is sent from the page itself.
#[function_component(Contact)]
pub fn contact() -> Html {
    let on_navigate = use_page_nav();

    html! {
        <div class="contact" data-page={PageId::Contact.as_str()}>
            <div class="contact__container">
                <BackLink onclick={on_navigate.reform(|_: MouseEvent| PageId::Home)} />

                <div class="contact__header">
                    <h1>{"Contact"}</h1>
                    <p>
                        {"制作のご相談・お見積もりはお気軽に。"}<br/>
                        {"企画段階からのご相談も歓迎しています。"}
                    </p>
                </div>

                <form
                    class="contact__form"
                    action={format!("mailto:{}", CONTACT_EMAIL)}
                    method="POST"
                    enctype="text/plain"
                >
                    <div class="field">
                        <label class="field__label" for="contact-name">{"Name / Company"}</label>
                        <input
                            id="contact-name"
                            name="name"
                            type="text"
                            class="field__input"
                            placeholder="お名前 または 貴社名"
                        />
                    </div>
                    <div class="field">
                        <label class="field__label" for="contact-email">{"Email"}</label>
                        <input
                            id="contact-email"
                            name="email"
                            type="email"
                            class="field__input"
                            placeholder="email@example.com"
                        />
                    </div>
                    <div class="field">
                        <label class="field__label" for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            name="message"
                            rows="4"
                            class="field__input field__input--area"
                            placeholder="ご相談内容をご記入ください"
                        />
                    </div>
                    <div class="contact__submit">
                        <CtaButton submit=true class={classes!("contact__send")}>{"Send Message"}</CtaButton>
                    </div>
                </form>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 10rem 0 5rem;
                    background: #ffffff;
                    min-height: 100vh;
                }
                .contact__container {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .contact__header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .contact__header h1 {
                    font-family: "Cormorant Garamond", serif;
                    font-size: 3.75rem;
                    margin: 0 0 1.5rem;
                }
                .contact__header p { color: #4b5563; font-weight: 500; }
                .contact__form {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .field__label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #9ca3af;
                    transition: color 200ms;
                }
                .field:focus-within .field__label { color: #C5A059; }
                .field__input {
                    width: 100%;
                    padding: 0.75rem 0;
                    font-size: 1.125rem;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid #e5e7eb;
                    transition: border-color 200ms;
                }
                .field__input:hover { border-color: #9ca3af; }
                .field__input:focus { outline: none; border-color: #111111; }
                .field__input--area { resize: none; font-family: inherit; }
                .contact__submit { text-align: center; padding-top: 2rem; }
                .contact__send { width: 100%; }
                @media (min-width: 768px) {
                    .contact__send { width: auto; min-width: 200px; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render() -> String {
        ServerRenderer::<Contact>::new().hydratable(false).render().await
    }

    #[tokio::test]
    async fn form_posts_to_mail_client() {
        let html = render().await;
        assert!(html.contains(r#"action="mailto:fomus.official@gmail.com""#));
        assert!(html.contains(r#"method="POST""#));
        assert!(html.contains(r#"enctype="text/plain""#));
    }

    #[tokio::test]
    async fn fields_are_named_for_submission() {
        let html = render().await;
        for name in ["name", "email", "message"] {
            assert!(html.contains(&format!(r#"name="{}""#, name)), "missing {}", name);
        }
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains("Send Message"));
    }

    #[tokio::test]
    async fn links_back_home() {
        let html = render().await;
        assert!(html.contains("Back to TOP"));
        assert_eq!(html.matches(r#"data-page="contact""#).count(), 1);
    }
}
