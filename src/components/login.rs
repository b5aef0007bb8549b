use crate::auth::{login, signup, use_auth};
use crate::components::icons::Users;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页的两个标签
#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Signup,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();
    let auth_state = auth_ctx.state;

    let (active_tab, set_active_tab) = signal(AuthTab::Login);
    // 自动填充上次登录的用户名（密码从不保存）
    let (username, set_username) = signal(auth_state.get_untracked().remembered_username);
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (info_msg, set_info_msg) = signal(Option::<String>::None);

    // Redirect if already authenticated
    Effect::new(move |_| {
        let state = auth_state.get();
        if !state.is_loading && state.is_logged_in {
            router.navigate(AppRoute::Feed.to_path());
        }
    });

    let select_tab = move |tab: AuthTab| {
        set_active_tab.set(tab);
        set_error_msg.set(None);
        set_info_msg.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let tab = active_tab.get();

        let missing_field = username.get().is_empty()
            || password.get().is_empty()
            || (tab == AuthTab::Signup && confirm_password.get().is_empty());
        if missing_field {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);
        set_info_msg.set(None);

        spawn_local(async move {
            let result = match tab {
                AuthTab::Login => {
                    login(
                        &auth_ctx,
                        &router,
                        &username.get_untracked(),
                        &password.get_untracked(),
                    )
                    .await
                }
                AuthTab::Signup => {
                    signup(
                        &auth_ctx,
                        &router,
                        &username.get_untracked(),
                        &password.get_untracked(),
                        &confirm_password.get_untracked(),
                    )
                    .await
                }
            };

            match result {
                Err(e) => set_error_msg.set(Some(e.message)),
                Ok(()) if tab == AuthTab::Signup => {
                    // 注册成功：停留在登录页展示确认信息
                    set_info_msg.set(Some(
                        "Account created successfully! Please log in.".to_string(),
                    ));
                    set_active_tab.set(AuthTab::Login);
                    set_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                // 登录成功的导航已由流程逻辑发出
                Ok(()) => {}
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Users attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Social Connect"</h1>
                        <p class="text-base-content/70">"Where Connections Come Alive"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div role="tablist" class="tabs tabs-boxed mb-2">
                            <a
                                role="tab"
                                class=move || {
                                    if active_tab.get() == AuthTab::Login { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| select_tab(AuthTab::Login)
                            >
                                "Login"
                            </a>
                            <a
                                role="tab"
                                class=move || {
                                    if active_tab.get() == AuthTab::Signup { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| select_tab(AuthTab::Signup)
                            >
                                "Signup"
                            </a>
                        </div>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show when=move || info_msg.get().is_some()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>{move || info_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="Username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <Show when=move || active_tab.get() == AuthTab::Signup>
                            <div class="form-control">
                                <label class="label" for="confirm-password">
                                    <span class="label-text">"Confirm Password"</span>
                                </label>
                                <input
                                    id="confirm-password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                    prop:value=confirm_password
                                    class="input input-bordered"
                                />
                            </div>
                        </Show>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any()
                                } else if active_tab.get() == AuthTab::Signup {
                                    "Signup".into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
