use crate::bridge::model::LocatorModel;
use anyhow::{anyhow, Context, Result};
use log::info;
use pulsecore::location::PositionFix;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, reply, Filter};

pub fn bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

type SharedModel = Arc<RwLock<LocatorModel>>;

fn position_reply(state: SharedModel) -> reply::WithStatus<reply::Json> {
    let fix = match state.write() {
        Ok(mut guard) => {
            guard.requests_served += 1;
            guard.fix
        }
        Err(_) => None,
    };

    match fix {
        Some(fix) => reply::with_status(reply::json(&fix), StatusCode::OK),
        None => reply::with_status(
            reply::json(&json!({"status": "unavailable"})),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
    }
}

/// Hosts the position endpoint the map queries once at startup.
pub struct LocatorBridge {
    state: SharedModel,
}

impl LocatorBridge {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LocatorModel::default())),
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let state = self.state.clone();
        let state_filter = warp::any().map(move || state.clone());

        let position_route = warp::path("position")
            .and(warp::path::end())
            .and(warp::get())
            .and(state_filter)
            .map(position_reply);

        let health_route = warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .map(|| reply::with_status(reply::json(&json!({"status": "ok"})), StatusCode::OK));

        position_route.or(health_route)
    }

    /// Binds `address` and serves the routes on a background thread with its
    /// own runtime. Returns the bound address; binding errors surface here.
    pub fn spawn(&self, address: SocketAddr) -> Result<SocketAddr> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("building locator runtime")?;
        let (bound, server) = {
            let _entered = runtime.enter();
            warp::serve(self.routes())
                .try_bind_ephemeral(address)
                .with_context(|| format!("binding locator to {}", address))?
        };
        thread::spawn(move || runtime.block_on(server));
        Ok(bound)
    }

    pub fn publish(&self, fix: Option<PositionFix>) -> Result<()> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| anyhow!("locator state lock poisoned"))?;
        guard.fix = fix;
        match fix {
            Some(fix) => info!(
                "[locator] serving fix ({:.5}, {:.5})",
                fix.latitude, fix.longitude
            ),
            None => info!("[locator] location unavailable"),
        }
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[locator] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> LocatorModel {
        self.state.read().unwrap().clone()
    }
}

impl Default for LocatorBridge {
    fn default() -> Self {
        Self::new()
    }
}
