use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub version:    String,
	pub collection: String,
	pub request_id: Option<String>,
	pub accept:     Option<String>,
	pub body:       Value,
}

pub struct FakeFinanceState {
	idempotent:         bool,
	failing_collection: Option<String>,
	requests:           Mutex<Vec<RecordedRequest>>,
	transaction_ids:    Mutex<HashMap<String, u64>>,
	next_id:            Mutex<u64>,
}

impl FakeFinanceState {
	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().unwrap().clone()
	}

	pub fn requests_to(&self, collection: &str) -> Vec<RecordedRequest> {
		self.requests()
			.into_iter()
			.filter(|request| request.collection == collection)
			.collect()
	}

	fn allocate_id(&self) -> u64 {
		let mut next_id = self.next_id.lock().unwrap();
		*next_id += 1;
		*next_id
	}
}

/// Finance API stand-in listening on an ephemeral local port.
pub struct FakeFinanceServer {
	pub url:   String,
	pub state: web::Data<FakeFinanceState>,
	handle:    ServerHandle,
}

impl FakeFinanceServer {
	pub async fn stop(self) {
		self.handle.stop(true).await;
	}
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
	req.headers()
		.get(name)
		.and_then(|value| value.to_str().ok())
		.map(str::to_string)
}

async fn create(
	path: web::Path<(String, String)>,
	req: HttpRequest,
	body: web::Json<Value>,
	state: web::Data<FakeFinanceState>,
) -> HttpResponse {
	let (version, collection) = path.into_inner();
	let request_id = header(&req, "X-Request-ID");

	state.requests.lock().unwrap().push(RecordedRequest {
		version,
		collection: collection.clone(),
		request_id: request_id.clone(),
		accept: header(&req, "Accept"),
		body: body.into_inner(),
	});

	if state.failing_collection.as_deref() == Some(collection.as_str()) {
		return HttpResponse::UnprocessableEntity()
			.json(json!({ "errors": ["rejected"] }));
	}

	let id = match (collection.as_str(), request_id, state.idempotent) {
		("transactions", Some(request_id), true) => {
			let known = state.transaction_ids.lock().unwrap().get(&request_id).copied();
			match known {
				Some(id) => id,
				None => {
					let id = state.allocate_id();
					state.transaction_ids.lock().unwrap().insert(request_id, id);
					id
				}
			}
		}
		_ => state.allocate_id(),
	};

	HttpResponse::Created().json(json!({ "id": id }))
}

pub async fn start_fake_finance_server(
	idempotent: bool,
	failing_collection: Option<&str>,
) -> FakeFinanceServer {
	let state = web::Data::new(FakeFinanceState {
		idempotent,
		failing_collection: failing_collection.map(str::to_string),
		requests: Mutex::new(Vec::new()),
		transaction_ids: Mutex::new(HashMap::new()),
		next_id: Mutex::new(0),
	});

	let app_state = state.clone();
	let server = HttpServer::new(move || {
		App::new()
			.app_data(app_state.clone())
			.route("/api/{version}/{collection}", web::post().to(create))
	})
	.workers(1)
	.bind(("127.0.0.1", 0))
	.expect("Failed to bind fake finance server");

	let addr = server.addrs()[0];
	let server = server.run();
	let handle = server.handle();
	actix_web::rt::spawn(server);

	FakeFinanceServer {
		url: format!("http://{addr}"),
		state,
		handle,
	}
}
