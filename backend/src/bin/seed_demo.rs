//! Seeds demo data: ten employees with one paired entrada/salida day each,
//! plus the two panel accounts. Stands in for the biometric ingestion path
//! during local development.

use chrono::{Days, Duration, NaiveTime};
use rand::Rng;

use asistencia_backend::{
    config::Config,
    db::connection::create_pool,
    models::attendance::EventKind,
    repositories::{attendance as attendance_repo, employee as employee_repo, user as user_repo},
    utils::{password::hash_password, time::today_local},
};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Luis", "María", "Carlos", "Diana", "Jorge", "Valentina", "Andrés", "Paula",
    "Santiago", "Laura", "Felipe", "Camila", "Sebastián", "Natalia", "Ricardo", "Daniela",
    "Juan", "Carolina", "Miguel",
];

const LAST_NAMES: &[&str] = &[
    "García", "Rodríguez", "Martínez", "López", "González", "Hernández", "Pérez", "Sánchez",
    "Ramírez", "Torres",
];

const ROLES: &[&str] = &[
    "Analista de Datos",
    "Desarrollador",
    "Científico de Datos",
    "Ingeniero de IA",
    "MLOps",
    "QA",
    "Product Designer",
    "Scrum Master",
];

fn pick<'a>(rng: &mut impl Rng, options: &'a [&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let today = today_local(&config.time_zone);
    let mut rng = rand::thread_rng();

    let mut employee_ids = Vec::new();
    for _ in 0..10 {
        let nombre = format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES));
        let documento = rng.gen_range(10_000_000u64..=99_999_999).to_string();
        let cargo = pick(&mut rng, ROLES);
        let telefono = format!("+57 {}", rng.gen_range(3_000_000_000u64..=3_999_999_999));
        let id =
            employee_repo::insert_employee(&pool, &nombre, &documento, cargo, Some(&telefono))
                .await?;
        employee_ids.push(id);
    }

    // One complete day per employee: exit between 17:00 and 19:59, entry
    // eight hours earlier.
    for &employee_id in &employee_ids {
        let days_ago = rng.gen_range(0..=20u64);
        let date = today - Days::new(days_ago);
        let exit_time = NaiveTime::from_hms_opt(rng.gen_range(17..=19), rng.gen_range(0..=59), 0)
            .expect("static time");
        let exit_at = date.and_time(exit_time);
        let entry_at = exit_at - Duration::hours(8);
        let device = format!("DISP-{:02}", rng.gen_range(1..=99));

        attendance_repo::insert_record(&pool, employee_id, &device, EventKind::Entry, entry_at)
            .await?;
        attendance_repo::insert_record(&pool, employee_id, &device, EventKind::Exit, exit_at)
            .await?;
    }

    println!(
        "Seed completado: {} empleados y {} registros en registros_asistencia (entrada/salida).",
        employee_ids.len(),
        employee_ids.len() * 2
    );

    // Reset the panel accounts to the two demo users.
    sqlx::query("DELETE FROM usuarios_sistema").execute(&pool).await?;
    user_repo::insert_system_user(&pool, "admin", &hash_password("admin123")?, Some("Administrador"))
        .await?;
    user_repo::insert_system_user(&pool, "demo", &hash_password("demo123")?, Some("Usuario Demo"))
        .await?;

    println!("Usuarios creados: admin/admin123 y demo/demo123");

    Ok(())
}
