use crate::{scanner::WifiScanner, services::scan::ScanService};
use actix_files::NamedFile;
use actix_web::{HttpResponse, Responder, web};
use log::debug;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct Api<Scanner>
where
    Scanner: WifiScanner,
{
    pub scanner: Scanner,
    /// Serializes scans across all workers
    pub scan_lock: Arc<Mutex<()>>,
    pub index_html: PathBuf,
}

impl<Scanner> Api<Scanner>
where
    Scanner: WifiScanner,
{
    pub fn new(scanner: Scanner, index_html: PathBuf) -> Self {
        Api {
            scanner,
            scan_lock: Arc::new(Mutex::new(())),
            index_html,
        }
    }

    pub async fn index(api: web::Data<Self>) -> actix_web::Result<NamedFile> {
        debug!("index() called");
        Ok(NamedFile::open(&api.index_html)?)
    }

    pub async fn scan(api: web::Data<Self>) -> impl Responder {
        debug!("scan() called");

        let _guard = api.scan_lock.lock().await;
        HttpResponse::Ok().json(ScanService::scan(&api.scanner).await)
    }

    pub async fn simulate_attack(api: web::Data<Self>) -> impl Responder {
        debug!("simulate_attack() called");

        let _guard = api.scan_lock.lock().await;
        HttpResponse::Ok().json(ScanService::simulate_attack(&api.scanner).await)
    }

    pub async fn version() -> impl Responder {
        HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
    }
}
