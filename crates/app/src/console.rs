//! Interactive console front-end.
//!
//! A line-driven adapter over the workflows: it reads commands, calls the
//! matching workflow operation, and prints the result. No business logic
//! lives here.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use barberbook_client::ApiClient;
use barberbook_core::errors::BookingError;
use barberbook_store::{FileSessionStore, SessionStore};
use chrono::{Local, Utc};
use eyre::Result;

use crate::config::AppConfig;
use crate::guard::{AuthGuard, Page};
use crate::view;
use crate::workflows::auth::{AuthWorkflow, RegistrationForm};
use crate::workflows::booking::{BookingContext, BookingWorkflow};
use crate::workflows::dashboard::{AppointmentFilter, DashboardWorkflow};
use crate::workflows::owner::{OwnerWorkflow, ShopForm};
use crate::workflows::shops::ShopsWorkflow;

const HELP: &str = "\
Commands:
  shops                       list shops
  search <term>               filter the shop list
  shop <id>                   shop detail (services and employees)
  book <shopId> <serviceId>   start a booking
  reschedule <appointmentId> <shopId> <serviceId>
                              move an existing appointment
  appointments                my appointments (upcoming|past|cancelled tabs)
  cancel <appointmentId>      cancel an appointment
  login <email> <password>    sign in
  register                    create an account
  profile <first> <last> <phone>
                              update my profile
  owner                       owner dashboard (shop owners only)
  logout                      sign out
  quit";

pub async fn run(config: AppConfig) -> Result<()> {
    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::open(&config.session_file)?);
    let client = ApiClient::new(config.client.clone());
    let guard = AuthGuard::new(store.clone());

    // Opportunistic refresh on startup, like every page load does.
    let _ = guard.refresh_if_needed(&client, Utc::now()).await;

    match guard.check_auth(Utc::now())? {
        Some(session) => println!("Welcome back, {}.", session.user.first_name),
        None => println!("Welcome to BarberBook. Type `help` to get started."),
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        let outcome = match command {
            "" => Ok(()),
            "help" => {
                println!("{HELP}");
                Ok(())
            }
            "quit" | "exit" => break,
            "shops" => list_shops(&client).await,
            "search" => search_shops(&client, &args.join(" ")).await,
            "shop" => shop_detail(&client, &args).await,
            "book" => start_booking(&client, &guard, &args, false).await,
            "reschedule" => start_booking(&client, &guard, &args, true).await,
            "appointments" => show_dashboard(&client, &guard).await,
            "cancel" => cancel_appointment(&client, &guard, &args).await,
            "login" => login(&client, &guard, store.clone(), &args).await,
            "register" => register(&client, store.clone()).await,
            "profile" => update_profile(&client, &guard, store.clone(), &args).await,
            "owner" => owner_dashboard(&client, &guard).await,
            "logout" => {
                let page = guard.logout()?;
                println!("Signed out. (back to {page:?})");
                Ok(())
            }
            other => {
                println!("Unknown command `{other}`. Type `help` for the list.");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            match &err {
                BookingError::Authentication(message) => {
                    println!("{message} (use `login <email> <password>`)");
                }
                _ => println!("Error: {err}"),
            }
        }
    }

    Ok(())
}

async fn list_shops(client: &ApiClient) -> Result<(), BookingError> {
    let mut workflow = ShopsWorkflow::new(client.clone());
    workflow.load().await?;
    render_shops(&workflow.visible());
    Ok(())
}

async fn search_shops(client: &ApiClient, term: &str) -> Result<(), BookingError> {
    let mut workflow = ShopsWorkflow::new(client.clone());
    workflow.load().await?;
    workflow.search(term);
    render_shops(&workflow.visible());
    Ok(())
}

fn render_shops(shops: &[barberbook_core::models::shop::Shop]) {
    if shops.is_empty() {
        println!("No shops found.");
        return;
    }
    println!("{} shop(s):", shops.len());
    for shop in shops {
        println!("  {}", view::shop_line(shop));
    }
}

async fn shop_detail(client: &ApiClient, args: &[&str]) -> Result<(), BookingError> {
    let shop_id = parse_id(args.first(), "shop id")?;
    let workflow = ShopsWorkflow::new(client.clone());
    let detail = workflow.detail(shop_id).await?;

    println!("{}", view::shop_line(&detail.shop));
    if let Some(description) = &detail.shop.description {
        println!("  {description}");
    }
    println!("Services:");
    for service in &detail.services {
        println!(
            "  #{} {} | {} ({})",
            service.id,
            service.name,
            view::format_price(service.price),
            view::format_duration(service.duration),
        );
    }
    println!("Employees:");
    for employee in &detail.employees {
        println!("  #{} {}", employee.id, employee.display_name());
    }
    println!("Book with: book {} <serviceId>", detail.shop.id);
    Ok(())
}

async fn start_booking(
    client: &ApiClient,
    guard: &AuthGuard,
    args: &[&str],
    edit: bool,
) -> Result<(), BookingError> {
    // `book shopId=3&serviceId=9[&edit=true&appointmentId=11]` also works,
    // mirroring the link format shops hand out.
    let context = if args.len() == 1 && args[0].contains('=') {
        BookingContext::parse(args[0])?
    } else if edit {
        let appointment_id = parse_id(args.first(), "appointment id")?;
        let shop_id = parse_id(args.get(1), "shop id")?;
        let service_id = parse_id(args.get(2), "service id")?;
        BookingContext::edit(shop_id, service_id, appointment_id)
    } else {
        let shop_id = parse_id(args.first(), "shop id")?;
        let service_id = parse_id(args.get(1), "service id")?;
        BookingContext::new(shop_id, service_id)
    };

    // Guests may browse slots; the submit step is what demands a login.
    let session = guard.check_auth(Utc::now())?;

    let now = Local::now().naive_local();
    let mut workflow =
        BookingWorkflow::start(client.clone(), context, session, now).await?;

    println!(
        "Booking {} at {} | {}",
        workflow.service().name,
        workflow.shop().name,
        view::format_price(workflow.service().price),
    );
    if !workflow.employees().is_empty() {
        println!("Employees (employee <id> to choose, `employee any` to clear):");
        for employee in workflow.employees() {
            println!("  #{} {}", employee.id, employee.display_name());
        }
    }
    render_slots(&workflow);

    let stdin = io::stdin();
    loop {
        print!("booking> ");
        io::stdout().flush().map_err(|e| BookingError::Internal(Box::new(e)))?;
        let Some(line) = stdin.lock().lines().next() else {
            return Ok(());
        };
        let line = line.map_err(|e| BookingError::Internal(Box::new(e)))?;
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        let now = Local::now().naive_local();
        let outcome = match command {
            "" => Ok(()),
            "back" => return Ok(()),
            "date" => match args.first().and_then(|d| d.parse().ok()) {
                Some(date) => {
                    let result = workflow.select_date(date, now).await;
                    if result.is_ok() {
                        render_slots(&workflow);
                    }
                    result
                }
                None => Err(BookingError::Validation(
                    "Usage: date YYYY-MM-DD".to_string(),
                )),
            },
            "employee" => {
                let choice = match args.first() {
                    Some(&"any") | None => None,
                    Some(id) => Some(parse_id(Some(id), "employee id")?),
                };
                let result = workflow.select_employee(choice, now).await;
                if result.is_ok() {
                    render_slots(&workflow);
                }
                result
            }
            "slots" => {
                render_slots(&workflow);
                Ok(())
            }
            "pick" => match args.first() {
                Some(time) => workflow.select_slot(time).map(|_| {
                    println!("Selected {}.", view::format_slot(time));
                    println!("`confirm` to {}.", workflow.action_label().to_lowercase());
                }),
                None => Err(BookingError::Validation("Usage: pick HH:MM".to_string())),
            },
            "confirm" => match workflow.submit().await {
                Ok(appointment) => {
                    let done = if workflow.is_edit() {
                        "rescheduled"
                    } else {
                        "booked"
                    };
                    println!(
                        "Appointment {done}! {} at {}",
                        view::format_date(appointment.appointment_date),
                        appointment.appointment_time.format("%H:%M"),
                    );
                    return Ok(());
                }
                Err(err) => Err(err),
            },
            other => {
                println!(
                    "Booking commands: date YYYY-MM-DD | employee <id|any> | slots | \
                     pick HH:MM | confirm | back (got `{other}`)"
                );
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("Error: {err}");
        }
    }
}

fn render_slots<A>(workflow: &BookingWorkflow<A>)
where
    A: barberbook_client::ShopApi
        + barberbook_client::AvailabilityApi
        + barberbook_client::AppointmentApi
        + Sync,
{
    let today = Local::now().naive_local().date();
    println!(
        "Available times for {}:",
        view::format_date(workflow.selected_date())
    );
    if let Some(notice) = workflow.empty_slots_notice(today) {
        println!("  {notice}");
        return;
    }
    let times: Vec<String> = workflow
        .slots()
        .iter()
        .map(|slot| view::format_slot(&slot.time))
        .collect();
    println!("  {}", times.join("  "));
    if let Some(selected) = workflow.selected_slot() {
        println!("Selected: {}", view::format_slot(selected));
    }
}

async fn show_dashboard(client: &ApiClient, guard: &AuthGuard) -> Result<(), BookingError> {
    let session = guard.require_auth("appointments", Utc::now())?;
    let mut workflow = DashboardWorkflow::new(client.clone(), session);
    workflow.load().await?;

    let now = Local::now().naive_local();
    let stats = workflow.stats(now);
    println!(
        "{}: {} upcoming, {} completed",
        workflow.user_name(),
        stats.upcoming,
        stats.completed,
    );

    for (filter, label) in [
        (AppointmentFilter::Upcoming, "Upcoming"),
        (AppointmentFilter::Past, "Past"),
        (AppointmentFilter::Cancelled, "Cancelled"),
    ] {
        workflow.set_filter(filter);
        let visible = workflow.visible(now);
        if visible.is_empty() {
            continue;
        }
        println!("{label}:");
        for appointment in visible {
            println!("  {}", view::appointment_line(appointment));
        }
    }
    Ok(())
}

async fn cancel_appointment(
    client: &ApiClient,
    guard: &AuthGuard,
    args: &[&str],
) -> Result<(), BookingError> {
    let appointment_id = parse_id(args.first(), "appointment id")?;
    let session = guard.require_auth("appointments", Utc::now())?;
    let mut workflow = DashboardWorkflow::new(client.clone(), session);
    workflow.load().await?;
    workflow.cancel(appointment_id).await?;
    println!("Appointment {appointment_id} cancelled.");
    Ok(())
}

async fn login(
    client: &ApiClient,
    guard: &AuthGuard,
    store: Arc<dyn SessionStore>,
    args: &[&str],
) -> Result<(), BookingError> {
    let (Some(email), Some(password)) = (args.first(), args.get(1)) else {
        return Err(BookingError::Validation(
            "Usage: login <email> <password>".to_string(),
        ));
    };

    let workflow = AuthWorkflow::new(client.clone(), store);
    let session = workflow.login(email, password).await?;
    println!("Login successful! Welcome, {}.", session.user.first_name);

    if let Some(destination) = guard.post_login_destination()? {
        println!("You were headed to: {destination}");
    } else {
        let landing = AuthGuard::landing_for(&session.user);
        if landing == Page::OwnerDashboard {
            println!("Owner tools available via `owner`.");
        }
    }
    Ok(())
}

async fn register(client: &ApiClient, store: Arc<dyn SessionStore>) -> Result<(), BookingError> {
    let form = RegistrationForm {
        first_name: prompt("First name: ")?,
        last_name: prompt("Last name: ")?,
        email: prompt("Email: ")?,
        phone: prompt("Phone (10-15 digits): ")?,
        password: prompt("Password: ")?,
        confirm_password: prompt("Confirm password: ")?,
    };

    let workflow = AuthWorkflow::new(client.clone(), store);
    let user = workflow.register(form).await?;
    println!(
        "Account created for {}. You can now `login {} <password>`.",
        user.full_name(),
        user.email,
    );
    Ok(())
}

async fn update_profile(
    client: &ApiClient,
    guard: &AuthGuard,
    store: Arc<dyn SessionStore>,
    args: &[&str],
) -> Result<(), BookingError> {
    let (Some(first), Some(last), Some(phone)) = (args.first(), args.get(1), args.get(2)) else {
        return Err(BookingError::Validation(
            "Usage: profile <first> <last> <phone>".to_string(),
        ));
    };

    let session = guard.require_auth("profile", Utc::now())?;
    let workflow = AuthWorkflow::new(client.clone(), store);
    let user = workflow.update_profile(&session, first, last, phone).await?;
    println!("Profile updated: {} ({})", user.full_name(), user.email);
    Ok(())
}

async fn owner_dashboard(client: &ApiClient, guard: &AuthGuard) -> Result<(), BookingError> {
    let session = guard.require_auth("owner-dashboard", Utc::now())?;
    let workflow = OwnerWorkflow::new(client.clone(), session)?;

    let shops = workflow.my_shops().await?;
    if shops.is_empty() {
        println!("You have no shops yet. `create-shop` walks through creating one.");
    } else {
        println!("Your shops:");
        for shop in &shops {
            println!("  {}", view::shop_line(shop));
        }
    }

    let stdin = io::stdin();
    loop {
        print!("owner> ");
        io::stdout()
            .flush()
            .map_err(|e| BookingError::Internal(Box::new(e)))?;
        let Some(line) = stdin.lock().lines().next() else {
            return Ok(());
        };
        let line = line.map_err(|e| BookingError::Internal(Box::new(e)))?;
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        let outcome = match command {
            "" => Ok(()),
            "back" => return Ok(()),
            "shops" => match workflow.my_shops().await {
                Ok(shops) => {
                    for shop in &shops {
                        println!("  {}", view::shop_line(shop));
                    }
                    Ok(())
                }
                Err(err) => Err(err),
            },
            "create-shop" => {
                let form = ShopForm {
                    name: prompt("Shop name: ")?,
                    phone: prompt("Phone: ")?,
                    address: prompt("Address: ")?,
                    city: prompt("City: ")?,
                    state: prompt("State: ")?,
                    zip_code: prompt("Zip code: ")?,
                    description: prompt("Description (optional): ")?,
                    opening_time: prompt("Opening time HH:MM (optional): ")?,
                    closing_time: prompt("Closing time HH:MM (optional): ")?,
                };
                workflow.create_shop(form).await.map(|shop| {
                    println!("Shop #{} created.", shop.id);
                })
            }
            "add-service" => {
                let shop_id = parse_id(args.first(), "shop id")?;
                let name = prompt("Service name: ")?;
                let description = prompt("Description (optional): ")?;
                let price: f64 = prompt("Price: ")?.parse().map_err(|_| {
                    BookingError::Validation("A numeric price is required.".to_string())
                })?;
                let duration: i64 = prompt("Duration (minutes): ")?.parse().map_err(|_| {
                    BookingError::Validation("A numeric duration is required.".to_string())
                })?;
                workflow
                    .add_service(shop_id, &name, &description, price, duration)
                    .await
                    .map(|service| println!("Service #{} added.", service.id))
            }
            "del-service" => {
                let shop_id = parse_id(args.first(), "shop id")?;
                let service_id = parse_id(args.get(1), "service id")?;
                workflow
                    .remove_service(shop_id, service_id)
                    .await
                    .map(|_| println!("Service {service_id} deleted."))
            }
            "add-employee" => {
                let shop_id = parse_id(args.first(), "shop id")?;
                let name = prompt("Employee name: ")?;
                let role = prompt("Role: ")?;
                let email = prompt("Email (optional): ")?;
                let phone = prompt("Phone (optional): ")?;
                workflow
                    .add_employee(shop_id, &name, &role, &email, &phone)
                    .await
                    .map(|employee| println!("Employee #{} added.", employee.id))
            }
            "del-employee" => {
                let shop_id = parse_id(args.first(), "shop id")?;
                let employee_id = parse_id(args.get(1), "employee id")?;
                workflow
                    .remove_employee(shop_id, employee_id)
                    .await
                    .map(|_| println!("Employee {employee_id} removed."))
            }
            other => {
                println!(
                    "Owner commands: shops | create-shop | add-service <shopId> | \
                     del-service <shopId> <serviceId> | add-employee <shopId> | \
                     del-employee <shopId> <employeeId> | back (got `{other}`)"
                );
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("Error: {err}");
        }
    }
}

fn prompt(label: &str) -> Result<String, BookingError> {
    print!("{label}");
    io::stdout()
        .flush()
        .map_err(|e| BookingError::Internal(Box::new(e)))?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| BookingError::Internal(Box::new(e)))?;
    Ok(line.trim().to_string())
}

fn parse_id(value: Option<&&str>, label: &str) -> Result<i64, BookingError> {
    value
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| BookingError::Validation(format!("A numeric {label} is required.")))
}
