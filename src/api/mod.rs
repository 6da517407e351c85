pub mod models;

use anyhow::Result;
use models::{Kantor, KantorPayload, NewUser, RoleUser, Status, Transaksi, User, UserUpdate};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Thin client over the AbsenOfc REST backend. The backend answers
/// collection requests with `204 No Content` when a table is empty, so
/// that status maps to an empty list rather than an error.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        let res = self.client.get(&url).send().await?;

        match res.status() {
            StatusCode::NO_CONTENT => Ok(Vec::new()),
            status if status.is_success() => Ok(res.json().await?),
            status => Err(anyhow::anyhow!("GET {} failed: {}", path, status)),
        }
    }

    pub async fn get_transaksis(&self) -> Result<Vec<Transaksi>> {
        self.get_collection("/api/transaksis").await
    }

    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.get_collection("/api/users").await
    }

    pub async fn get_kantors(&self) -> Result<Vec<Kantor>> {
        self.get_collection("/api/kantors").await
    }

    pub async fn get_roleusers(&self) -> Result<Vec<RoleUser>> {
        self.get_collection("/api/roleusers").await
    }

    pub async fn get_statuses(&self) -> Result<Vec<Status>> {
        self.get_collection("/api/statuses").await
    }

    pub async fn get_user(&self, nik: &str) -> Result<User> {
        let url = format!("{}/api/users/{}", self.base_url, nik);
        let res = self.client.get(&url).send().await?;

        if !res.status().is_success() {
            return Err(anyhow::anyhow!(
                "GET /api/users/{} failed: {}",
                nik,
                res.status()
            ));
        }

        Ok(res.json().await?)
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<()> {
        let url = format!("{}/api/users", self.base_url);
        let res = self.client.post(&url).json(user).send().await?;

        if !res.status().is_success() {
            return Err(anyhow::anyhow!("POST /api/users failed: {}", res.status()));
        }

        Ok(())
    }

    pub async fn update_user(&self, nik: &str, user: &UserUpdate) -> Result<()> {
        let url = format!("{}/api/users/{}", self.base_url, nik);
        let res = self.client.put(&url).json(user).send().await?;

        if !res.status().is_success() {
            return Err(anyhow::anyhow!(
                "PUT /api/users/{} failed: {}",
                nik,
                res.status()
            ));
        }

        Ok(())
    }

    pub async fn delete_user(&self, nik: &str) -> Result<()> {
        let url = format!("{}/api/users/{}", self.base_url, nik);
        let res = self.client.delete(&url).send().await?;

        if !res.status().is_success() {
            return Err(anyhow::anyhow!(
                "DELETE /api/users/{} failed: {}",
                nik,
                res.status()
            ));
        }

        Ok(())
    }

    pub async fn create_kantor(&self, kantor: &KantorPayload) -> Result<()> {
        let url = format!("{}/api/kantors", self.base_url);
        let res = self.client.post(&url).json(kantor).send().await?;

        if !res.status().is_success() {
            return Err(anyhow::anyhow!("POST /api/kantors failed: {}", res.status()));
        }

        Ok(())
    }

    pub async fn update_kantor(&self, idkantor: &str, kantor: &KantorPayload) -> Result<()> {
        let url = format!("{}/api/kantors/{}", self.base_url, idkantor);
        let res = self.client.put(&url).json(kantor).send().await?;

        if !res.status().is_success() {
            return Err(anyhow::anyhow!(
                "PUT /api/kantors/{} failed: {}",
                idkantor,
                res.status()
            ));
        }

        Ok(())
    }

    pub async fn delete_kantor(&self, idkantor: &str) -> Result<()> {
        let url = format!("{}/api/kantors/{}", self.base_url, idkantor);
        let res = self.client.delete(&url).send().await?;

        if !res.status().is_success() {
            return Err(anyhow::anyhow!(
                "DELETE /api/kantors/{} failed: {}",
                idkantor,
                res.status()
            ));
        }

        Ok(())
    }
}
