//! Windows Socket Backend (placeholder)
//!
//! The Windows backend is declared but not implemented. Building for
//! Windows fails here explicitly instead of compiling a partial type.

// TODO: implement a WSASocketW-based backend mirroring the POSIX module:
// SocketHandle = SOCKET, SocketPlatformError = WSAGetLastError codes.
compile_error!("the Windows socket resource backend is not implemented yet");
