//! App catalog feature: the CRUD surface over catalog entries and their
//! per-app factor flags.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/apps` | List apps (optional `search` substring filter) |
//! | GET | `/api/apps/{id}` | Get one app with factors resolved |
//! | POST | `/api/apps` | Create an app with its factor set |
//! | PUT | `/api/apps/{id}` | Full replace of an app and its factor set |
//! | DELETE | `/api/apps/{id}` | Delete an app and its factor rows |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::AppsRepository;
pub use services::AppsService;
