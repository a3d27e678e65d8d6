use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Unlock Your Potential"</h2>
                    <p class="section-description">
                        "Samwise is Opensource and Free. Made with ❤️. Here's how it can help you:"
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="📈"
                        title="Rapid Growth"
                        description="Turn every conversation into a learning moment. Get instant feedback, apply it immediately. Years of growth, compressed into days."
                    />
                    <FeatureCard
                        icon="💡"
                        title="Thought Clarity"
                        description="Sharpen your ideas. Uncover new angles. Transform complex thoughts into powerful, concise messages that resonate."
                    />
                    <FeatureCard
                        icon="🧠"
                        title="AI-Powered Intelligence"
                        description="Elevate your conversational strategy. Anticipate. Adapt. Communicate with precision and impact in any situation."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </div>
    }
}
