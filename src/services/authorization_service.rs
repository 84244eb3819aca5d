//! Política de acceso por roles
//!
//! Mapea los tres perfiles (Administrador, Mecánico, Motorista) a las
//! capacidades que cada operación exige. Toda operación del dominio
//! consulta esta tabla al inicio y falla con Forbidden si el rol no
//! tiene la capacidad requerida.

use crate::models::auth::{UserInfo, UserRole};
use crate::utils::errors::AppError;

/// Capacidades del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Crear/editar/desactivar vehículos y asignar motoristas
    ManageVehicles,
    /// Crear usuarios
    ManageUsers,
    /// Anexar registros al ledger de manutención
    RecordMaintenance,
    /// Enviar lecturas de odómetro
    SubmitMileage,
    /// Listar la flota (vista completa o reducida según el rol)
    ViewFleet,
    /// Ver el dashboard de alertas de toda la flota
    ViewDashboard,
}

/// Verificar si un rol posee una capacidad
pub fn allowed(role: UserRole, capability: Capability) -> bool {
    match role {
        // El Administrador tiene acceso total
        UserRole::Administrator => true,
        UserRole::Mechanic => matches!(
            capability,
            Capability::RecordMaintenance | Capability::ViewFleet | Capability::ViewDashboard
        ),
        UserRole::Driver => matches!(
            capability,
            Capability::SubmitMileage | Capability::ViewFleet
        ),
    }
}

/// Exigir una capacidad; falla con Forbidden si el rol no la tiene
pub fn require(user: &UserInfo, capability: Capability) -> Result<(), AppError> {
    if allowed(user.role, capability) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "El rol '{}' no tiene permiso para esta operación",
            user.role.as_str()
        )))
    }
}
