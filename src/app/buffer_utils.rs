use fltk::text::TextBuffer;

/// Copy the contents of an FLTK text buffer into a `String`.
///
/// `TextBuffer::text()` leaves the `malloc()`'d C copy behind on every call.
/// The editor mirrors the buffer into the document store on each keystroke, so
/// this goes through the C API directly and frees the copy itself.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `as_ptr` is the live Fl_Text_Buffer owned by `buf`. FLTK returns a
    // NUL-terminated malloc'd string (or null), which is copied out and freed once.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
