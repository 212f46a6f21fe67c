//! Local account service: a users table plus the session slot in the
//! mirror. Register, sign-in, sign-out, current-user lookup.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use chrono::Local;
use rusqlite::{OptionalExtension, Row, params};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Salted sha-256, stored as `salt$hex`.
fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{salt}${}", hex::encode(hasher.finalize()))
}

fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, _)) => hash_password(password, salt) == stored,
        None => false,
    }
}

fn map_user_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        uid: row.get("uid")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        company: row.get("company")?,
        role: row.get("role")?,
        created_at: row.get("created_at")?,
    })
}

pub fn find_by_email(pool: &mut DbPool, email: &str) -> AppResult<Option<User>> {
    let user = pool
        .conn
        .query_row("SELECT * FROM users WHERE email = ?1", [email], map_user_row)
        .optional()?;
    Ok(user)
}

pub fn find_by_uid(pool: &mut DbPool, uid: &str) -> AppResult<Option<User>> {
    let user = pool
        .conn
        .query_row("SELECT * FROM users WHERE uid = ?1", [uid], map_user_row)
        .optional()?;
    Ok(user)
}

/// Create an account. Self-registered accounts always get the "employee"
/// role; there is no way to self-assign anything higher.
pub fn register(
    pool: &mut DbPool,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    company: &str,
) -> AppResult<User> {
    if find_by_email(pool, email)?.is_some() {
        return Err(AppError::DuplicateEmail(email.to_string()));
    }

    let salt = Uuid::new_v4().simple().to_string();
    let user = User {
        uid: Uuid::new_v4().to_string(),
        email: email.to_string(),
        password_hash: hash_password(password, &salt),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        company: company.to_string(),
        role: "employee".to_string(),
        created_at: Local::now().to_rfc3339(),
    };

    pool.conn.execute(
        "INSERT INTO users (uid, email, password_hash, first_name, last_name, company, role, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            user.uid,
            user.email,
            user.password_hash,
            user.first_name,
            user.last_name,
            user.company,
            user.role,
            user.created_at,
        ],
    )?;

    Ok(user)
}

/// Verify credentials. Bad email and bad password collapse into the same
/// error, one human-readable message.
pub fn sign_in(pool: &mut DbPool, email: &str, password: &str) -> AppResult<User> {
    let user = find_by_email(pool, email)?.ok_or(AppError::InvalidCredentials)?;
    if !verify_password(password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }
    Ok(user)
}
