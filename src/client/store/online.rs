use dioxus::prelude::*;

/// Reports `navigator.onLine` now and on every connectivity change
const ONLINE_LISTENER: &str = r#"
const send = () => dioxus.send(navigator.onLine);
send();
window.addEventListener("online", send);
window.addEventListener("offline", send);
"#;

/// Browser connectivity, `true` until the browser reports otherwise
#[derive(Clone, Copy)]
pub struct OnlineStatus(pub Signal<bool>);

/// Provide [`OnlineStatus`] and keep it in sync with the browser's online/offline events
pub fn use_online_status_provider() -> OnlineStatus {
    let status = use_context_provider(|| OnlineStatus(Signal::new(true)));

    use_future(move || async move {
        let mut online = status.0;
        let mut listener = document::eval(ONLINE_LISTENER);

        while let Ok(is_online) = listener.recv::<bool>().await {
            online.set(is_online);
        }
    });

    status
}

pub fn use_online_status() -> bool {
    let status = use_context::<OnlineStatus>();
    (status.0)()
}
