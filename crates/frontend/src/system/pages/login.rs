use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::top_header::APP_TITLE;
use crate::system::auth::api::INVALID_CREDENTIALS;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (failed, set_failed) = signal(false);
    let (other_error, set_other_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_failed.set(false);
        set_other_error.set(None);

        spawn_local(async move {
            match do_login(session, username_val, password_val).await {
                Ok(()) => {}
                Err(e) if e == INVALID_CREDENTIALS => set_failed.set(true),
                Err(e) => set_other_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{APP_TITLE}</h1>
                <h2>"Sign in"</h2>

                <Show when=move || failed.get()>
                    <div class="error-message">{INVALID_CREDENTIALS}</div>
                </Show>
                {move || other_error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
