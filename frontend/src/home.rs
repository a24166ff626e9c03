use futures::future::try_join3;
use gloo_net::http::Request;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::{clipboard::copy_to_clipboard, config::CONFIG, styles::*};
use shared::{models::*, error::ErrorResponse, validation::{validate_pool_request, MAX_TITLE_LENGTH}};

const SUCCESS_MESSAGE: &str =
    "Bolão criado com sucesso! O código foi copiado para a área de transferência.";
const FAILURE_MESSAGE: &str = "Falha ao criar bolão, tente novamente!";

#[derive(Debug, Clone, PartialEq)]
pub struct Counters {
    pub pools: i64,
    pub guesses: i64,
    pub users: i64,
}

enum LoadState {
    Loading,
    Ready(Counters),
    Failed(String),
}

pub struct Home {
    counters: LoadState,
    title: String,
}

pub enum Msg {
    CountersLoaded(Result<Counters, String>),
    UpdateTitle(String),
    Submit,
    SubmitResult(Result<String, String>),
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            Msg::CountersLoaded(fetch_counters().await)
        });

        Self {
            counters: LoadState::Loading,
            title: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CountersLoaded(Ok(counters)) => {
                self.counters = LoadState::Ready(counters);
                true
            },
            Msg::CountersLoaded(Err(error)) => {
                self.counters = LoadState::Failed(error);
                true
            },
            Msg::UpdateTitle(title) => {
                self.title = title;
                true
            },
            Msg::Submit => {
                // The input control is `required`, but a whitespace-only
                // title still gets past it.
                if let Some(error) = validation_failure(&self.title) {
                    ctx.link().send_message(Msg::SubmitResult(Err(error)));
                    return false;
                }

                let request = CreatePoolRequest { title: self.title.clone() };
                ctx.link().send_future(async move {
                    Msg::SubmitResult(submit_pool(request).await)
                });
                false
            },
            Msg::SubmitResult(Ok(code)) => {
                self.title.clear();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(error) = copy_to_clipboard(code).await {
                        web_sys::console::error_1(&error.into());
                    }
                    alert(SUCCESS_MESSAGE);
                });
                true
            },
            Msg::SubmitResult(Err(error)) => {
                web_sys::console::error_1(&format!("Error: {}", error).into());
                alert(FAILURE_MESSAGE);
                true
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.counters {
            LoadState::Loading => html! {
                <div class={CONTAINER}>
                    <div class={combine_classes("animate-pulse mx-auto", TEXT_MUTED)}>
                        {"Carregando..."}
                    </div>
                </div>
            },
            LoadState::Failed(error) => html! {
                <div class={CONTAINER}>
                    <div class={combine_classes(&error_alert(), "mx-auto")}>
                        {format!("Falha ao carregar a página: {}", error)}
                    </div>
                </div>
            },
            LoadState::Ready(counters) => self.render_page(ctx, counters),
        }
    }
}

impl Home {
    fn render_page(&self, ctx: &Context<Self>, counters: &Counters) -> Html {
        html! {
            <div class={CONTAINER}>
                <main class="max-w-2xl">
                    <span class="text-yellow-500 font-bold text-xl">{"⚽ bolão da copa"}</span>
                    <h1 class={HEADING_LG}>
                        {"Crie seu próprio bolão da copa e compartilhe entre amigos!"}
                    </h1>

                    <div class="mt-10 flex items-center gap-2">
                        <strong class="text-gray-100 text-xl">
                            <span class={TEXT_HIGHLIGHT}>{users_value(counters.users)}</span>
                            {" pessoas já estão usando"}
                        </strong>
                    </div>

                    {self.render_form(ctx)}

                    <p class={combine_classes("mt-5", TEXT_MUTED)}>
                        {"Após criar seu bolão, você receberá um código único que poderá usar para convidar outras pessoas 🚀"}
                    </p>

                    <div class={STATS_ROW}>
                        {render_stat(stat_value(counters.pools), "Bolões criados")}
                        <div class={STAT_DIVIDER} />
                        {render_stat(stat_value(counters.guesses), "Palpites enviados")}
                    </div>
                </main>
            </div>
        }
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateTitle(input.value())
        });

        html! {
            <form {onsubmit} class={FORM_ROW}>
                <input type="text" class={INPUT_BASE}
                    required={true}
                    placeholder="Qual nome do seu bolão?"
                    maxlength={MAX_TITLE_LENGTH.to_string()}
                    value={self.title.clone()}
                    {oninput} />
                <button type="submit" class={BUTTON_SUBMIT}>
                    {"Criar meu bolão"}
                </button>
            </form>
        }
    }
}

fn render_stat(value: String, label: &'static str) -> Html {
    html! {
        <div class="flex items-center gap-6">
            <span class={combine_classes(TEXT_HIGHLIGHT, "text-2xl")}>{"✔"}</span>
            <div class="flex flex-col">
                <span class={STAT_VALUE}>{value}</span>
                <span>{label}</span>
            </div>
        </div>
    }
}

fn stat_value(count: i64) -> String {
    format!("+{}", displayed_count(count))
}

fn users_value(count: i64) -> String {
    format!("+{}", count)
}

fn validation_failure(title: &str) -> Option<String> {
    validate_pool_request(&CreatePoolRequest { title: title.to_string() })
        .err()
        .map(|error| error.to_string())
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

async fn fetch_count(path: &'static str) -> Result<i64, String> {
    let response = Request::get(&format!("{}{}", CONFIG.api_base_url, path))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let body = response.json::<CountResponse>().await.map_err(|e| e.to_string())?;
    Ok(body.count)
}

async fn fetch_counters() -> Result<Counters, String> {
    let (pools, guesses, users) = try_join3(
        fetch_count("/pools/count"),
        fetch_count("/guesses/count"),
        fetch_count("/users/count"),
    )
    .await?;

    Ok(Counters { pools, guesses, users })
}

async fn submit_pool(request: CreatePoolRequest) -> Result<String, String> {
    let response = Request::post(&format!("{}/pools", CONFIG.api_base_url))
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    match response.status() {
        200 | 201 => response.json::<CreatePoolResponse>().await
            .map(|data| data.code)
            .map_err(|e| e.to_string()),
        status => {
            let error = response.json::<ErrorResponse>().await
                .map(|err| err.error)
                .unwrap_or_else(|_| format!("Unexpected status {}", status));
            Err(error)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{stat_value, users_value, validation_failure};

    #[test]
    fn test_stat_values() {
        assert_eq!(stat_value(5), "+4");
        assert_eq!(stat_value(10), "+9");
        assert_eq!(users_value(100), "+100");
    }

    #[test]
    fn test_whitespace_title_is_rejected_with_feedback() {
        assert!(validation_failure("Copa 2022").is_none());
        // the `required` control lets these through; submission must not
        // drop them silently
        assert!(validation_failure("   ").is_some());
        assert!(validation_failure("").is_some());
    }
}
