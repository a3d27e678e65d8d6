use leptos::prelude::*;

#[component]
pub fn WhySamwise() -> impl IntoView {
    view! {
        <section id="why" class="why-samwise">
            <div class="container">
                <h2 class="section-title">"Why Samwise?"</h2>
                <p class="section-description">
                    "Just like Sam never left Frodo's side, Samwise is your loyal companion in the journey "
                    "of communication and growth. We're here to support you, no matter how deep the waters get."
                </p>
                <blockquote class="why-quote">
                    "\"I made a promise, Mr. Frodo. A promise. 'Don't you leave him, Samwise Gamgee.' And I don't mean to.\""
                </blockquote>
            </div>
        </section>
    }
}
