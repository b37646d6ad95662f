use yew::prelude::*;
use yew_hooks::prelude::*;

/// `Pending` until the first attach, then `Mounted` for good.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MountPhase {
    Pending,
    Mounted,
}

impl MountPhase {
    pub fn mount(self) -> Self {
        MountPhase::Mounted
    }

    pub fn is_mounted(self) -> bool {
        self == MountPhase::Mounted
    }
}

#[derive(Properties, PartialEq)]
pub struct MountGuardProps {
    pub children: Children,
}

/// Shows a pulsing skeleton until the component has been attached to the
/// DOM once, then renders its children for the rest of its lifetime.
///
/// Pre-rendered markup and the first client paint therefore always agree.
#[function_component(MountGuard)]
pub fn mount_guard(props: &MountGuardProps) -> Html {
    let phase = use_state(|| MountPhase::Pending);

    {
        let phase = phase.clone();
        use_mount(move || {
            phase.set(phase.mount());
        });
    }

    html! {
        <GuardView phase={*phase}>
            { for props.children.iter() }
        </GuardView>
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardViewProps {
    pub phase: MountPhase,
    pub children: Children,
}

#[function_component(GuardView)]
pub fn guard_view(props: &GuardViewProps) -> Html {
    if !props.phase.is_mounted() {
        return html! {
            <div class="mount-skeleton" aria-hidden="true"></div>
        };
    }

    html! {
        <>{ for props.children.iter() }</>
    }
}

/// Rendered once by the page that hosts guarded content.
pub const MOUNT_GUARD_CSS: &str = r#"
.mount-skeleton {
    height: 12rem;
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.5);
    animation: skeletonPulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes skeletonPulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[function_component(Revealed)]
    fn revealed() -> Html {
        html! { <p class="revealed">{"interactive content"}</p> }
    }

    #[function_component(Guarded)]
    fn guarded() -> Html {
        html! {
            <MountGuard>
                <Revealed />
            </MountGuard>
        }
    }

    #[function_component(AfterMount)]
    fn after_mount() -> Html {
        html! {
            <GuardView phase={MountPhase::Pending.mount()}>
                <Revealed />
            </GuardView>
        }
    }

    #[test]
    fn mount_is_one_way() {
        let phase = MountPhase::Pending;
        assert!(!phase.is_mounted());
        let phase = phase.mount();
        assert!(phase.is_mounted());
        assert_eq!(phase.mount(), MountPhase::Mounted);
    }

    #[tokio::test]
    async fn renders_skeleton_before_mount() {
        let rendered = yew::LocalServerRenderer::<Guarded>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains("mount-skeleton"));
        assert!(!rendered.contains("interactive content"));
    }

    #[tokio::test]
    async fn reveals_children_once_mounted() {
        let rendered = yew::LocalServerRenderer::<AfterMount>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains("interactive content"));
        assert!(!rendered.contains("mount-skeleton"));
    }
}
