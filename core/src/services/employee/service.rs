//! Employee service implementation

use tracing::{debug, error, info, warn};

use ia_shared::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::employee::Employee;
use crate::domain::entities::token::LegacyEmployeeToken;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::EmployeeRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Authorization scheme prefix, including the separating space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Credential and token verifier for employees
pub struct EmployeeService<R: EmployeeRepository> {
    repository: R,
    token_service: TokenService,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a new employee service
    ///
    /// # Arguments
    ///
    /// * `repository` - Employee persistence
    /// * `token_service` - JWT codec holding the signing secret
    pub fn new(repository: R, token_service: TokenService) -> Self {
        Self {
            repository,
            token_service,
        }
    }

    /// Access to the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Access to the token codec
    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Extracts the token from an Authorization header value
    ///
    /// The prefix match is case-sensitive; surrounding whitespace of the
    /// token itself is trimmed.
    pub fn extract_bearer(auth_header: Option<&str>) -> Result<&str, AuthError> {
        let header = auth_header.ok_or(AuthError::MissingHeader)?;
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::InvalidScheme)?
            .trim();

        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        Ok(token)
    }

    /// Verifies an Authorization header and resolves the employee
    ///
    /// # Returns
    ///
    /// * `Ok(Employee)` - The header carries a valid token for a registered employee
    /// * `Err(AuthError)` - Why verification failed
    pub async fn verify_bearer(&self, auth_header: Option<&str>) -> Result<Employee, AuthError> {
        let token = Self::extract_bearer(auth_header)?;
        self.resolve_token(token).await
    }

    /// Verifies a bare token and resolves the employee named by its subject
    pub async fn resolve_token(&self, token: &str) -> Result<Employee, AuthError> {
        let claims = self.token_service.decode(token.trim())?;

        match self.repository.find_by_email(&claims.sub).await {
            Ok(Some(employee)) => Ok(employee),
            Ok(None) => Err(AuthError::UnknownSubject),
            Err(e) => Err(AuthError::Repository(e.to_string())),
        }
    }

    /// Whether the Authorization header denotes a registered employee
    ///
    /// Never fails: any problem with the header, the token or the lookup
    /// yields `false`.
    pub async fn is_employee(&self, auth_header: Option<&str>) -> bool {
        match self.verify_bearer(auth_header).await {
            Ok(employee) => {
                debug!(employee_id = %employee.employee_id, "Bearer token verified");
                true
            }
            Err(e) => {
                log_rejection(&e);
                false
            }
        }
    }

    /// Resolves the employee a bare token belongs to
    ///
    /// Same failure policy as [`Self::is_employee`].
    pub async fn employee_from_token(&self, token: &str) -> Option<Employee> {
        match self.resolve_token(token).await {
            Ok(employee) => Some(employee),
            Err(e) => {
                log_rejection(&e);
                None
            }
        }
    }

    /// Checks a raw password against the employee's stored hash
    pub fn validate_credentials(
        &self,
        employee: &Employee,
        raw_password: &str,
        hasher: &dyn PasswordHasher,
    ) -> bool {
        let valid = hasher.matches(raw_password, &employee.password);
        if !valid {
            info!(email = %mask_email(&employee.email), "Password mismatch");
        }
        valid
    }

    /// Issues a signed access token for an employee
    pub fn issue_token(&self, employee: &Employee) -> Result<String, TokenError> {
        self.token_service.issue(&employee.email)
    }

    /// Produces the legacy unsigned token
    ///
    /// The result carries no authority and cannot be passed to
    /// [`Self::employee_from_token`] as a credential.
    pub fn generate_employee_token(&self, identifier: &str) -> LegacyEmployeeToken {
        LegacyEmployeeToken::generate(identifier)
    }

    /// Persists an employee record as given
    pub async fn register(&self, employee: Employee) -> Result<Employee, DomainError> {
        let saved = self.repository.save(employee).await?;
        info!(
            id = saved.id,
            employee_id = %saved.employee_id,
            email = %mask_email(&saved.email),
            "Employee registered"
        );
        Ok(saved)
    }

    /// Registers a new employee from a raw password
    ///
    /// The email is normalized and validated, duplicates are rejected and
    /// the password is hashed before the record is stored.
    ///
    /// # Returns
    ///
    /// * `Ok(Employee)` - The stored employee with its new id
    /// * `Err(DomainError::Validation)` - Bad email or empty password
    /// * `Err(DomainError::Auth(AuthError::AlreadyRegistered))` - Email taken
    pub async fn register_with_password(
        &self,
        mut employee: Employee,
        raw_password: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<Employee, DomainError> {
        employee.email = normalize_email(&employee.email);
        if !is_valid_email(&employee.email) {
            return Err(DomainError::Validation {
                message: format!("Invalid email address: {}", employee.email),
            });
        }
        if raw_password.is_empty() {
            return Err(DomainError::Validation {
                message: "Password must not be empty".to_string(),
            });
        }

        if self.repository.find_by_email(&employee.email).await?.is_some() {
            warn!(email = %mask_email(&employee.email), "Registration rejected: email already registered");
            return Err(AuthError::AlreadyRegistered {
                email: employee.email,
            }
            .into());
        }

        employee.password = hasher.hash(raw_password)?;
        self.register(employee).await
    }

    /// Looks up an employee by email, `None` on any failure
    pub async fn find_by_email(&self, email: &str) -> Option<Employee> {
        self.repository
            .find_by_email(email)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, email = %mask_email(email), "Employee lookup by email failed");
                None
            })
    }

    /// Looks up an employee by employee number, `None` on any failure
    pub async fn find_by_employee_id(&self, employee_id: &str) -> Option<Employee> {
        self.repository
            .find_by_employee_id(employee_id)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, employee_id, "Employee lookup by employee id failed");
                None
            })
    }
}

fn log_rejection(error: &AuthError) {
    match error {
        AuthError::MissingHeader | AuthError::InvalidScheme | AuthError::EmptyToken => {
            debug!(reason = error.reason(), "Bearer credential rejected");
        }
        AuthError::Repository(message) => {
            error!(reason = error.reason(), error = %message, "Employee lookup failed during verification");
        }
        _ => {
            warn!(reason = error.reason(), "Token rejected");
        }
    }
}
