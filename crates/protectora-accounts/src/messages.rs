//! User-facing validation and failure messages.

pub const EMAIL_REQUIRED: &str = "Email es requerido";
pub const EMAIL_INVALID: &str = "Email no válido";
pub const PASSWORD_REQUIRED: &str = "Contraseña es requerida";
pub const PASSWORD_TOO_SHORT: &str = "Mínimo 6 caracteres";
pub const NOMBRE_REQUIRED: &str = "Nombre es requerido";
pub const APELLIDO_REQUIRED: &str = "Apellido es requerido";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Las contraseñas no coinciden";
pub const TELEFONO_INVALID: &str = "Teléfono no válido";

pub const LOGIN_FAILED: &str = "Error al iniciar sesión. Verifica tus credenciales.";
pub const REGISTER_FAILED: &str = "Error al registrar. Por favor intenta nuevamente.";
