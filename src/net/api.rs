//! REST calls to the Mana Karma backend.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR):
//! stubs returning `ApiError::Network`, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every authenticated call maps a 401 to [`ApiError::Unauthorized`] so the
//! caller can route it through the forced session invalidation path. Other
//! non-2xx responses carry the server's message and optional field errors.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{
    AuthResponse, InsightBundle, Profile, Statement, Summary, Transaction, TransactionInput,
    TransactionPage,
};
#[cfg(feature = "hydrate")]
use super::types::{InsightResponse, StatementsResponse, TransactionResponse, UserResponse};
use crate::state::statements::UploadMeta;
use crate::state::transactions::TransactionQuery;

/// Base path of the backend API. Overridable at compile time for deployments
/// where the API is not reverse-proxied under the app origin.
pub const API_BASE: &str = match option_env!("MANAKARMA_API_BASE") {
    Some(base) => base,
    None => "/api",
};

#[cfg(feature = "hydrate")]
mod client {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::super::error::ApiError;
    use super::super::types::ApiErrorBody;

    pub fn url(path: &str) -> String {
        format!("{}{path}", super::API_BASE)
    }

    pub fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {token}"))
    }

    pub async fn send_json<B: serde::Serialize>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    pub async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    pub async fn get(path: &str, token: &str) -> Result<Response, ApiError> {
        send(bearer(Request::get(&url(path)), token)).await
    }

    /// Decode a response, mapping 401 to `Unauthorized` and other non-2xx
    /// statuses to `Api` with whatever error body the server attached.
    pub async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let body: ApiErrorBody = resp.json().await.unwrap_or_default();
            return Err(ApiError::from_status(status, body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn expect_ok(resp: Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let body: ApiErrorBody = resp.json().await.unwrap_or_default();
            return Err(ApiError::from_status(status, body));
        }
        Ok(())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on the server".to_owned()))
}

/// `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = client::send_json(
            gloo_net::http::Request::post(&client::url("/auth/login")),
            &body,
        )
        .await?;
        client::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        server_stub()
    }
}

/// `POST /auth/register`. The returned profile always has
/// `onboardingComplete = false`.
pub async fn register(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "firstName": first_name,
            "lastName": last_name,
            "email": email,
            "password": password,
        });
        let resp = client::send_json(
            gloo_net::http::Request::post(&client::url("/auth/register")),
            &body,
        )
        .await?;
        client::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (first_name, last_name, email, password);
        server_stub()
    }
}

/// `GET /auth/me` — exchange a stored token for the verified profile. Any
/// non-2xx means verification failed.
pub async fn fetch_current_user(token: String) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = client::get("/auth/me", &token).await?;
        client::decode::<UserResponse>(resp).await.map(|r| r.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// `PUT /users/profile` — partial or full profile fields; the response user
/// is the new authoritative profile.
pub async fn update_profile(token: &str, payload: &serde_json::Value) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = client::bearer(
            gloo_net::http::Request::put(&client::url("/users/profile")),
            token,
        );
        let resp = client::send_json(builder, payload).await?;
        client::decode::<UserResponse>(resp).await.map(|r| r.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        server_stub()
    }
}

/// `PUT /users/password`.
pub async fn change_password(
    token: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        let builder = client::bearer(
            gloo_net::http::Request::put(&client::url("/users/password")),
            token,
        );
        let resp = client::send_json(builder, &body).await?;
        client::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, current_password, new_password);
        server_stub()
    }
}

/// `GET /transactions` with the query's filters.
pub async fn fetch_transactions(
    token: &str,
    query: &TransactionQuery,
) -> Result<TransactionPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/transactions{}", query.query_string());
        let resp = client::get(&path, token).await?;
        client::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        server_stub()
    }
}

/// `GET /transactions` limited to the most recent few, for the dashboard.
pub async fn fetch_recent_transactions(
    token: &str,
    month: u32,
    year: i32,
    limit: u32,
) -> Result<Vec<Transaction>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/transactions?month={month}&year={year}&limit={limit}");
        let resp = client::get(&path, token).await?;
        client::decode::<TransactionPage>(resp).await.map(|p| p.transactions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, month, year, limit);
        server_stub()
    }
}

/// `POST /transactions`.
pub async fn create_transaction(
    token: &str,
    input: &TransactionInput,
) -> Result<Transaction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = client::bearer(
            gloo_net::http::Request::post(&client::url("/transactions")),
            token,
        );
        let resp = client::send_json(builder, input).await?;
        client::decode::<TransactionResponse>(resp).await.map(|r| r.transaction)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, input);
        server_stub()
    }
}

/// `PUT /transactions/{id}`.
pub async fn update_transaction(
    token: &str,
    id: &str,
    input: &TransactionInput,
) -> Result<Transaction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = client::bearer(
            gloo_net::http::Request::put(&client::url(&format!("/transactions/{id}"))),
            token,
        );
        let resp = client::send_json(builder, input).await?;
        client::decode::<TransactionResponse>(resp).await.map(|r| r.transaction)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, input);
        server_stub()
    }
}

/// `DELETE /transactions/{id}`.
pub async fn delete_transaction(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = client::bearer(
            gloo_net::http::Request::delete(&client::url(&format!("/transactions/{id}"))),
            token,
        );
        let resp = client::send(builder).await?;
        client::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        server_stub()
    }
}

/// `GET /transactions/summary`.
pub async fn fetch_summary(token: &str, month: u32, year: i32) -> Result<Summary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/transactions/summary?month={month}&year={year}");
        let resp = client::get(&path, token).await?;
        client::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, month, year);
        server_stub()
    }
}

/// `GET /insights` — `None` until the first statement has been analyzed.
pub async fn fetch_insights(
    token: &str,
    month: u32,
    year: i32,
) -> Result<Option<InsightBundle>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/insights?month={month}&year={year}");
        let resp = client::get(&path, token).await?;
        client::decode::<InsightResponse>(resp).await.map(|r| r.insight)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, month, year);
        server_stub()
    }
}

/// `POST /insights/refresh` — regenerate insights for the month.
pub async fn refresh_insights(
    token: &str,
    month: u32,
    year: i32,
) -> Result<Option<InsightBundle>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "month": month, "year": year });
        let builder = client::bearer(
            gloo_net::http::Request::post(&client::url("/insights/refresh")),
            token,
        );
        let resp = client::send_json(builder, &body).await?;
        client::decode::<InsightResponse>(resp).await.map(|r| r.insight)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, month, year);
        server_stub()
    }
}

/// `GET /statements`.
pub async fn fetch_statements(token: &str) -> Result<Vec<Statement>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = client::get("/statements", token).await?;
        client::decode::<StatementsResponse>(resp).await.map(|r| r.statements)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// `POST /statements/upload` — multipart with the file and its metadata.
/// Browser-only; the page gating keeps this unreachable elsewhere.
#[cfg(feature = "hydrate")]
pub async fn upload_statement(
    token: &str,
    file: &web_sys::File,
    meta: &UploadMeta,
) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data".to_owned()))?;
    form.append_with_blob_and_filename("statement", file, &file.name())
        .map_err(|_| ApiError::Network("form data".to_owned()))?;
    let _ = form.append_with_str("month", &meta.month.to_string());
    let _ = form.append_with_str("year", &meta.year.to_string());
    let _ = form.append_with_str("bankName", &meta.bank_name);
    let _ = form.append_with_str("accountType", &meta.account_type);

    let resp = client::bearer(
        gloo_net::http::Request::post(&client::url("/statements/upload")),
        token,
    )
    .body(form)
    .map_err(|e| ApiError::Network(e.to_string()))?
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;
    client::expect_ok(resp).await
}

#[cfg(not(feature = "hydrate"))]
#[allow(unused)]
pub async fn upload_statement(token: &str, meta: &UploadMeta) -> Result<(), ApiError> {
    let _ = (token, meta);
    server_stub()
}

/// `DELETE /statements/{id}` — also removes the statement's transactions.
pub async fn delete_statement(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = client::bearer(
            gloo_net::http::Request::delete(&client::url(&format!("/statements/{id}"))),
            token,
        );
        let resp = client::send(builder).await?;
        client::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        server_stub()
    }
}
