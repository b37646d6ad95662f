use chrono::Datelike;
use yew::prelude::*;

use crate::components::carousel::{Carousel, CAROUSEL_CSS};
use crate::components::faq::FaqAccordion;
use crate::components::mount_guard::{MountGuard, MOUNT_GUARD_CSS};
use crate::config;
use crate::content::{site_content, SiteContent};

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub label: AttrValue,
    #[prop_or(AttrValue::from("cta-primary"))]
    pub class: AttrValue,
}

#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    html! {
        <a href={config::PRIMARY_CTA_HREF} class={props.class.to_string()}>
            {props.label.to_string()}
        </a>
    }
}

struct ComparisonRow {
    feature: &'static str,
    basic: &'static str,
    saramatic: &'static str,
}

const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow {
        feature: "Quarterly layouts",
        basic: "✓ Often includes basic quarterly pages",
        saramatic: "✓ Guided quarterly themes (Seed, Bloom, Flourish, Harvest) that shape your affirmations, reflections, and the emotional arc of your year",
    },
    ComparisonRow {
        feature: "Monthly layouts",
        basic: "✓ Often includes basic monthly pages",
        saramatic: "✓ Monthly themes that give structure to your weekly Shadow and daily Light affirmations, making reflection feel natural and meaningful",
    },
    ComparisonRow {
        feature: "Weekly layouts",
        basic: "✓ Often includes basic weekly pages",
        saramatic: "✓ Weekly themes with one clear Shadow affirmation that helps you understand the real challenge you're working through all week",
    },
    ComparisonRow {
        feature: "Daily pages",
        basic: "✓ To-do list and schedule",
        saramatic: "✓ A coordinated daily flow: schedule, to-dos, Light + Shadow affirmations, and AI prompts working together across your spread",
    },
    ComparisonRow {
        feature: "Emotional support",
        basic: "— Usually ignores your emotions",
        saramatic: "✓ Grounded in emotional contrast, helping you hold doubt, fear, and hope at the same time without collapsing into guilt or avoidance",
    },
    ComparisonRow {
        feature: "AI integration",
        basic: "— None",
        saramatic: "✓ Daily system + user prompts designed for ChatGPT, turning your affirmations into real insight, clarity, and next steps",
    },
    ComparisonRow {
        feature: "Reflection & growth",
        basic: "— Minimal or generic reflection",
        saramatic: "✓ Layered reflections at every level (yearly, quarterly, monthly, weekly, and daily) so your growth actually accumulates",
    },
];

const YEAR_FLOW: &[(&str, &str)] = &[
    ("Quarterly themes", "Seed, Bloom, Flourish, Harvest: four emotional seasons that give your year a clear rhythm."),
    ("Monthly themes", "Each month builds on its quarter with a focus that gently moves your story forward."),
    ("Weekly sub-themes", "Smaller, relatable angles that make the month's theme something you can actually live."),
    ("Weekly Shadow affirmation", "One honest challenge you sit with all week instead of juggling seven different problems."),
    ("Daily Light affirmation", "A new supportive truth each day that speaks directly to that week's Shadow."),
    ("ChatGPT + journaling", "Guided prompts & writing space that turn reflection into real habits."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_memo(|_| site_content(), ());
    let SiteContent {
        faqs,
        cover_slides,
        preview_slides,
        daily_slides,
    } = (*content).clone();
    let year = chrono::Utc::now().year();

    html! {
        <main class="home-page">
            // Hero
            <section id="hero" class="hero">
                <div class="hero-grid">
                    <div>
                        <p class="eyebrow">{"A different kind of affirmation journal"}</p>
                        <h1>
                            {"Tired of fake growth? Affirmations that actually work: End toxic positivity with The Saramatic Planner."}
                        </h1>
                        <p class="lead">
                            {format!("{} is a full 2026 digital journal + planner designed for people who are done with guilt-heavy self-help and forced positivity. Built around The Saramatic Way, it helps you meet yourself honestly, understand what you're feeling, and still move forward with compassion.", config::PRODUCT_NAME)}
                        </p>
                        <div class="inside">
                            <p class="inside-title">{"Inside, you're getting:"}</p>
                            <p class="lead">
                                {"It's a complete system that connects your emotions, your reflections, and your actual schedule:"}
                            </p>
                            <ul>
                                <li>{"Weekly Shadow affirmations (the real challenge you're working with) and daily Light affirmations (the supportive truth that helps you move through it)."}</li>
                                <li>{"Built-in ChatGPT prompts so you're never staring at a blank page or wondering what to journal about. You always have a gentle conversation starter."}</li>
                                <li>{"A full planner system with yearly, quarterly, monthly, weekly, and daily pages, so your inner work and real-life tasks finally live in one place instead of competing for energy."}</li>
                            </ul>
                        </div>
                        <div class="cta-row">
                            <Cta label="Get Instant Access: Start Your Authentic Growth Today" />
                            <p class="delivery-note">
                                {"Instant digital download · Hyperlinked PDF · Works beautifully on tablets & for printing."}
                            </p>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <MountGuard>
                            <Carousel
                                slides={cover_slides}
                                aspect_ratio={4.0 / 5.0}
                                max_width="28rem"
                                title="REAL GROWTH · NO TOXIC POSITIVITY"
                            />
                        </MountGuard>
                        <p class="visual-caption">{"Digital Planner · Hyperlinked PDF"}</p>
                    </div>
                </div>
            </section>

            // Why
            <section class="why">
                <div class="narrow centered">
                    <h2>{"Why The Saramatic Way exists"}</h2>
                    <p>
                        {"The Saramatic Way is the method behind the planner: a gentle approach to self-growth built on honesty, reflection, and emotional balance. Instead of pretending everything is fine, it gives you language for what you feel. Real change comes from meeting yourself where you actually are and choosing to grow through it with compassion."}
                    </p>
                    <p>
                        {"The planner applies this method through structured yearly, monthly, weekly, and daily pages that make reflection and planning feel approachable and deeply human. Instead of loose, random prompts, you move through a gentle rhythm of seasons, themes, and daily check-ins that all connect. It's a grounded, repeatable practice of awareness, acceptance, and authentic growth, one honest week at a time."}
                    </p>
                </div>
            </section>

            // Emotional contrast
            <section class="contrast">
                <div class="two-column">
                    <div>
                        <h2>{"Emotional contrast: Light & Shadow affirmations"}</h2>
                        <p>
                            {"Most affirmation journals ask you to repeat one nice sentence and pretend you believe it. The planner uses The Saramatic Way to guide your growth through emotional contrast: one Shadow for the week, one Light each day. Two truths, one honest and one hopeful, working together."}
                        </p>
                        <p>
                            {"Each month sits inside a quarterly theme. Each week has its own Shadow affirmation, the honest challenge you're working with. Every day brings a new Light affirmation that speaks directly to that Shadow. Over time, you're not forcing yourself to \"stay positive\"; you're learning to hear your fear, your doubt, and your hope at the same table and move forward anyway."}
                        </p>
                        <p class="emphasis">
                            {"Together, Light and Shadow create emotional contrast: the sweet spot where real, lasting change actually happens."}
                        </p>
                        <ul>
                            <li>{"Respond instead of react."}</li>
                            <li>{"Soften instead of shut down."}</li>
                            <li>{"Understand your patterns instead of judging yourself."}</li>
                            <li>{"Choose your next step with clarity instead of fear."}</li>
                        </ul>
                    </div>
                    <div class="card-stack">
                        <div class="card light">
                            <h3>{"The Light Affirmation"}</h3>
                            <p>{"The Light is your intention, the part of you that's reaching for clarity, courage, or self-trust. It's written to feel believable, not cheesy."}</p>
                            <p>{"Each day's Light affirmation answers: \"Given everything I'm feeling, what gentle truth do I want to lean toward today?\""}</p>
                        </div>
                        <div class="card shadow">
                            <h3>{"The Shadow Affirmation"}</h3>
                            <p>{"The Shadow is the honest challenge underneath your day: the fear, resistance, or old story that tends to flare up when you try to grow. It isn't the enemy; it's the message."}</p>
                            <p>{"You stay with one Shadow affirmation for the whole week so you can really hear what it's trying to protect, instead of fighting it, ignoring it, or pretending it's gone."}</p>
                        </div>
                    </div>
                </div>
            </section>

            // AI-guided reflection
            <section class="reflection">
                <div class="two-column">
                    <div>
                        <h2>{"Go deeper than just writing: AI-guided reflection made simple."}</h2>
                        <p>
                            {"Saramatic doesn't leave you alone with a pretty page and good intentions. Every day, you get a gentle ChatGPT prompt that helps you unpack your Light & Shadow affirmations so you can turn \"I feel off\" into real language, real insight, and real next steps."}
                        </p>
                        <p>
                            {"Think of it as a calm, non-judgy guide sitting beside you while you journal. It helps you notice patterns, soften self-criticism, and choose what to do next with more clarity instead of more pressure."}
                        </p>
                        <ul class="plain">
                            <li>{"• No more blank-page dread: you always know how to start the conversation."}</li>
                            <li>{"• Turn swirling thoughts into clear sentences you can actually work with."}</li>
                            <li>{"• Catch the insight in the moment, then bring it back to your journaling page."}</li>
                            <li>{"• Build a steady rhythm of reflection that feels supportive, not like extra homework."}</li>
                        </ul>
                        <div class="cta-row">
                            <Cta label="Unlock AI-guide Planner" class="cta-secondary" />
                        </div>
                    </div>
                    <div class="chat-sample">
                        <p class="chat-label">{"In ChatGPT · Sample flow"}</p>
                        <p>
                            <span class="speaker">{"You: "}</span>
                            {"Here are today's Light & Shadow affirmations. Help me unpack what the Shadow is trying to protect."}
                        </p>
                        <p>
                            <span class="speaker">{"ChatGPT: "}</span>
                            {"Let's look at what feels scary and what it's protecting. What's the smallest next action that feels honest and kind to you?"}
                        </p>
                        <p class="chat-note">
                            {"You paste in the prompt, let the conversation guide your reflection, then capture what matters on the journaling page. You're not just saying affirmations, you're actually becoming them."}
                        </p>
                    </div>
                </div>
            </section>

            // Year flow
            <section class="year-flow">
                <div class="two-column">
                    <div>
                        <h2>{"How the year unfolds inside the planner"}</h2>
                        <p>
                            {"The planner follows The Saramatic Way by moving through a story-like flow of seasons: quarterly themes, monthly themes, weekly Shadows, daily Lights, and daily reflection prompts. The entire system is designed to feel like a story arc, not a pile of disconnected pages."}
                        </p>
                        <div class="flow-rows">
                            { for YEAR_FLOW.iter().map(|(title, body)| html! {
                                <div class="flow-row" key={*title}>
                                    <p class="flow-title">{*title}</p>
                                    <p>{*body}</p>
                                </div>
                            }) }
                        </div>
                        <p>
                            {"Over time, this rhythm quietly rewires how you talk to yourself. You're never asked to pretend you're somewhere you're not. You're simply given a gentler way to move from where you are to where you want to be."}
                        </p>
                    </div>
                    <MountGuard>
                        <Carousel slides={preview_slides} aspect_ratio={3.0 / 4.0} />
                    </MountGuard>
                </div>
            </section>

            // Daily spread
            <section id="daily-spread" class="daily-spread">
                <div class="wide">
                    <div class="narrow centered">
                        <h2>{"What a day inside The Saramatic Planner really holds"}</h2>
                        <p>
                            {"Each daily spread weaves together honest affirmations, AI-guided reflection, health tracking, and real-life planning, so you're not choosing between \"doing the work\" and living your day. Everything that matters lives on the same spread: your feelings, your thoughts, your body, and your time."}
                        </p>
                    </div>
                    <div class="two-column daily-blocks">
                        <div>
                            <div class="daily-block">
                                <p class="block-title">{"Morning · Set your emotional tone with Light + Shadow"}</p>
                                <p>{"Weekly Shadow affirmation holds the honest challenge you're working with all week: the doubt, fear, or pattern that usually trips you up."}</p>
                                <p>{"Daily Light affirmation shifts how you respond to that challenge with a new supportive truth each day, written to feel believable, not cheesy."}</p>
                                <p class="benefit">{"Benefit: You start the day seeing the real problem and the path through it instead of pretending you're fine or drowning in guilt."}</p>
                            </div>
                            <div class="daily-block">
                                <p class="block-title">{"Any time of day · A real conversation with yourself (via ChatGPT)"}</p>
                                <p>{"Every daily spread includes a System instruction you paste into ChatGPT so it understands \"The Saramatic Way\" voice, and a User prompt that ties directly to today's Light + Shadow affirmations."}</p>
                                <ul>
                                    <li>{"Unpack what your Shadow is trying to protect."}</li>
                                    <li>{"Name what you're afraid will happen if you really change."}</li>
                                    <li>{"Find the smallest next step that's honest and kind to you."}</li>
                                </ul>
                                <p class="benefit">{"Benefit: You're not just repeating words. You're actually processing, making decisions, and learning how you talk to yourself under stress."}</p>
                            </div>
                        </div>
                        <div>
                            <div class="daily-block">
                                <p class="block-title">{"Through the day · Plan a life that matches your inner work"}</p>
                                <ul>
                                    <li>{"A 24-hour schedule broken into 30-minute increments, because not everyone lives a 9–5 life."}</li>
                                    <li>{"Space for goals, to-dos, and priorities, so your healing work and your real-world responsibilities live in one place."}</li>
                                    <li>{"A reminder to check your monthly tracker, so the little actions you're taking today feed into your bigger story."}</li>
                                </ul>
                                <p class="benefit">{"Benefit: Growth stops being \"extra homework\" and becomes something that quietly shapes how you spend your actual time."}</p>
                            </div>
                            <div class="daily-block">
                                <p class="block-title">{"Body & nervous system · Gentle daily health check-in"}</p>
                                <p>{"Food log with a simple visual macro wheel, sleep & mood check-ins with emoji-style faces, and a water tracker with cups to fill in throughout the day."}</p>
                                <p class="benefit">{"Benefit: You start to notice how sleep and food make your Shadow louder, instead of thinking you're \"just being dramatic.\""}</p>
                            </div>
                            <div class="daily-block">
                                <p class="block-title">{"Night · Close the loop with reflection"}</p>
                                <ul>
                                    <li>{"Capture what came up in ChatGPT or during the day."}</li>
                                    <li>{"Note what felt heavy, what opened, and what you want to carry into tomorrow."}</li>
                                    <li>{"Gently check: Did I move one step closer to the life I'm trying to build?"}</li>
                                </ul>
                                <p class="benefit">{"Benefit: Little moments become patterns. Patterns become habits. Habits become healing."}</p>
                            </div>
                        </div>
                    </div>
                    <div class="daily-gallery">
                        <MountGuard>
                            <Carousel
                                slides={daily_slides}
                                aspect_ratio={4.0 / 5.0}
                                title="INSIDE THE DAILY SPREAD"
                            />
                        </MountGuard>
                    </div>
                    <div class="cta-row centered">
                        <Cta label="Order Today" />
                    </div>
                </div>
            </section>

            // Comparison
            <section class="comparison">
                <div class="wide">
                    <h2 class="centered">{"A planner for your days. A practice for your healing."}</h2>
                    <p class="narrow centered">
                        {"The planner makes sure your emotional work supports your real-world goals, not competes with them."}
                    </p>
                    <div class="table-wrap">
                        <table>
                            <thead>
                                <tr>
                                    <th>{"What you get"}</th>
                                    <th>{"Most planners"}</th>
                                    <th>{config::PRODUCT_NAME}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for COMPARISON.iter().enumerate().map(|(index, row)| html! {
                                    <tr key={row.feature} class={if index % 2 == 0 { "row-even" } else { "row-odd" }}>
                                        <td class="feature">{row.feature}</td>
                                        <td>{row.basic}</td>
                                        <td class="ours">{row.saramatic}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
            </section>

            // Honest growth
            <section class="honest-growth">
                <div class="wide">
                    <h2 class="centered">{"Honest growth, gently guided"}</h2>
                    <p class="narrow centered">
                        {"Saramatic was created for people who are tired of being told to \"just think positive.\" It treats your mind and heart with respect and never asks you to pretend your pain doesn't exist in order to earn your progress."}
                    </p>
                    <div class="two-column panel">
                        <div>
                            <h3>{"Creator note"}</h3>
                            <p>
                                {"\"I created this planner because I was exhausted by the guilt-and-failure cycle of toxic positivity. This system works because it's built on honesty, not fantasy. It's the gentle structure I needed when everything felt like too much, something I could actually stick with on real, messy days.\""}
                            </p>
                            <p class="signature">{"— Sarahmarie, creator of The Saramatic"}</p>
                        </div>
                        <div>
                            <h3>{"Authentic Growth Guarantee"}</h3>
                            <p>
                                {"Try the planner for 30 days. If you don't feel more grounded, honest, and connected to yourself, we'll give you a full refund. No drama, no shaming, just a clean \"this wasn't for me.\""}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            // Final CTA + FAQ
            <section id="final-cta" class="final-cta">
                <div class="two-column">
                    <div class="final-copy">
                        <h2>{"It's time to stop faking it and start feeling it."}</h2>
                        <p>
                            {"This journal isn't asking you to be perfect. It's asking you to show up gently, consistently, and honestly. It meets you where you are, gives you words for what you're feeling, and helps you build a life that actually fits the person you're becoming."}
                        </p>
                        <Cta label="Start Your Journey Today" />
                    </div>
                    <FaqAccordion entries={faqs} />
                </div>
            </section>

            <footer class="site-footer">
                <p>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</p>
            </footer>

            <style>{HOME_CSS}</style>
            <style>{MOUNT_GUARD_CSS}</style>
            <style>{CAROUSEL_CSS}</style>
        </main>
    }
}

const HOME_CSS: &str = r#"
.home-page {
    min-height: 100vh;
    background: #FFF9F9;
    color: #514241;
}

.home-page section {
    padding: 5rem 1.5rem;
}

.home-page h1 {
    margin-top: 1rem;
    font-size: 2.5rem;
    font-weight: 700;
    line-height: 1.2;
    color: #0B4F6C;
}

.home-page h2 {
    font-size: 1.5rem;
    font-weight: 700;
    color: #0B4F6C;
}

.home-page h3 {
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.25em;
    color: #783B5A;
}

.home-page p {
    margin-top: 1rem;
    font-size: 0.875rem;
    line-height: 1.6;
}

.home-page ul {
    margin-top: 1rem;
    padding-left: 1.25rem;
    list-style: disc;
    font-size: 0.875rem;
}

.home-page ul.plain {
    list-style: none;
    padding-left: 0;
}

.hero,
.daily-spread,
.final-cta {
    background: linear-gradient(to bottom right, #F7C9C9, #F3E7E7, #F9EFF2);
}

.why {
    background: #F9EFF2;
}

.contrast,
.year-flow,
.comparison {
    background: linear-gradient(to bottom, #F7C9C9, #F3E7E7);
}

.hero-grid,
.two-column {
    max-width: 72rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: minmax(0, 1.1fr) minmax(0, 1fr);
    gap: 3rem;
    align-items: center;
}

.wide {
    max-width: 72rem;
    margin: 0 auto;
}

.narrow {
    max-width: 48rem;
    margin-left: auto;
    margin-right: auto;
}

.centered {
    text-align: center;
}

.eyebrow {
    font-size: 0.75rem !important;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: #783B5A;
}

.lead {
    font-size: 1rem !important;
}

.inside-title,
.emphasis,
.flow-title,
.block-title,
.benefit {
    font-weight: 600;
    color: #0B4F6C;
}

.cta-row {
    margin-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    align-items: center;
}

.cta-row.centered {
    justify-content: center;
}

.cta-primary,
.cta-secondary {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 9999px;
    padding: 0.75rem 2rem;
    font-size: 0.875rem;
    font-weight: 600;
    color: #fff;
    text-decoration: none;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transition: background 0.2s ease;
}

.cta-primary {
    background: #0B4F6C;
}

.cta-primary:hover {
    background: #783B5A;
}

.cta-secondary {
    background: #A3769F;
}

.cta-secondary:hover {
    background: #006D6F;
}

.delivery-note {
    max-width: 20rem;
    font-size: 0.75rem !important;
}

.hero-visual {
    text-align: center;
}

.visual-caption {
    font-size: 0.75rem !important;
    font-weight: 600;
    letter-spacing: 0.05em;
}

.card-stack {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.card {
    border-radius: 1rem;
    padding: 1.25rem;
}

.card.light {
    border: 1px solid #F3E7E7;
    background: rgba(249, 239, 242, 0.7);
}

.card.shadow {
    border: 1px solid #F7C9C9;
    background: rgba(243, 231, 231, 0.7);
}

.chat-sample {
    border-radius: 1.5rem;
    padding: 1.25rem;
    background: #0B4F6C;
    color: #fff;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.chat-label {
    font-size: 0.75rem !important;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.25em;
    color: #F7C9C9;
}

.speaker {
    font-weight: 600;
}

.chat-note {
    font-size: 0.75rem !important;
    color: #F9EFF2;
}

.flow-rows {
    margin-top: 1.5rem;
}

.flow-row {
    padding-bottom: 1rem;
    border-bottom: 1px solid #783B5A;
}

.daily-blocks {
    margin-top: 2.5rem;
    align-items: start;
}

.daily-block {
    margin-bottom: 2rem;
}

.daily-gallery {
    margin-top: 3rem;
}

.table-wrap {
    margin-top: 2rem;
    overflow-x: auto;
    border: 1px solid #F3E7E7;
    border-radius: 1.5rem;
    background: rgba(255, 255, 255, 0.8);
}

.table-wrap table {
    min-width: 100%;
    border-collapse: collapse;
    font-size: 0.875rem;
    text-align: left;
}

.table-wrap th {
    padding: 0.75rem 1rem;
    background: #783B5A;
    color: #fff;
    font-weight: 600;
}

.table-wrap td {
    padding: 0.75rem 1rem;
}

.row-even {
    background: rgba(255, 255, 255, 0.7);
}

.row-odd {
    background: rgba(249, 239, 242, 0.7);
}

.table-wrap .feature {
    font-weight: 600;
    color: #0B4F6C;
}

.table-wrap .ours {
    font-weight: 500;
    color: #0B4F6C;
}

.panel {
    margin-top: 2rem;
    padding: 1.5rem;
    border: 1px solid #F3E7E7;
    border-radius: 1.5rem;
    background: rgba(255, 255, 255, 0.8);
    align-items: start;
}

.signature {
    font-weight: 600;
    color: #783B5A;
}

.site-footer {
    padding: 2rem 1.5rem;
    text-align: center;
    font-size: 0.75rem;
    border-top: 1px solid #F3E7E7;
}

@media (max-width: 768px) {
    .hero-grid,
    .two-column {
        grid-template-columns: 1fr;
    }

    .home-page h1 {
        font-size: 1.875rem;
    }

    .home-page section {
        padding: 4rem 1.5rem;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_home() -> String {
        yew::LocalServerRenderer::<Home>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn cta_renders_link_with_class() {
        let rendered = yew::LocalServerRenderer::<Cta>::with_props(CtaProps {
            label: AttrValue::from("Order Today"),
            class: AttrValue::from("cta-primary"),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(rendered.contains("class=\"cta-primary\""));
        assert!(rendered.contains("href=\"#final-cta\""));
        assert!(rendered.contains("Order Today"));
    }

    #[tokio::test]
    async fn cta_accepts_another_class() {
        let rendered = yew::LocalServerRenderer::<Cta>::with_props(CtaProps {
            label: AttrValue::from("Unlock AI-guide Planner"),
            class: AttrValue::from("cta-secondary"),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(rendered.contains("class=\"cta-secondary\""));
        assert!(!rendered.contains("class=\"cta-primary\""));
    }

    #[tokio::test]
    async fn shared_styles_render_once() {
        let rendered = render_home().await;
        assert_eq!(rendered.matches(".carousel-frame {").count(), 1);
        assert_eq!(rendered.matches(".mount-skeleton {").count(), 1);
    }

    #[tokio::test]
    async fn carousels_wait_for_mount() {
        let rendered = render_home().await;
        assert_eq!(rendered.matches("class=\"mount-skeleton\"").count(), 3);
        assert!(!rendered.contains("aria-label=\"Next slide\""));
    }

    #[tokio::test]
    async fn renders_every_section() {
        let rendered = render_home().await;
        for id in ["id=\"hero\"", "id=\"daily-spread\"", "id=\"final-cta\""] {
            assert!(rendered.contains(id), "missing {}", id);
        }
        assert!(rendered.contains("Honest growth, gently guided"));
        assert_eq!(rendered.matches("<tr").count(), COMPARISON.len() + 1);
    }

    #[tokio::test]
    async fn calls_to_action_point_at_final_section() {
        let rendered = render_home().await;
        assert!(rendered.matches("href=\"#final-cta\"").count() >= 4);
    }

    #[tokio::test]
    async fn faq_comes_from_site_content() {
        let rendered = render_home().await;
        assert!(rendered.contains("Do I need a ChatGPT Pro subscription?"));
    }

    #[tokio::test]
    async fn footer_shows_current_year() {
        let rendered = render_home().await;
        let year = chrono::Utc::now().year();
        assert!(rendered.contains(&format!("© {} Saramatic", year)));
    }
}
