use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="cta-primary">
                {"Back to the planner"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 60vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #FFF9F9;
                    color: #514241;
                    text-align: center;
                }

                .not-found h1 {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #0B4F6C;
                }

                .not-found .cta-primary {
                    border-radius: 9999px;
                    padding: 0.75rem 2rem;
                    background: #0B4F6C;
                    color: #fff;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
