// JNI plumbing shared by the picker and the media store bridge.
//
// All calls go through the host activity. The activity is looked up via the
// application class loader because native threads spawned by tokio only see
// the system class loader.

use jni::objects::{JClass, JObject, JString, JValue};
use jni::JNIEnv;
use ndk_context::android_context;

use crate::AndroidBridgeConfig;

fn get_app_class_loader<'a>(env: &mut JNIEnv<'a>) -> Result<JObject<'a>, String> {
    let at_cls = env
        .find_class("android/app/ActivityThread")
        .map_err(|e| format!("ActivityThread not found: {}", e))?;
    let at = env
        .call_static_method(
            &at_cls,
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )
        .and_then(|v| v.l())
        .map_err(|e| format!("currentActivityThread failed: {}", e))?;

    let app = env
        .call_method(&at, "getApplication", "()Landroid/app/Application;", &[])
        .and_then(|v| v.l())
        .map_err(|e| format!("getApplication failed: {}", e))?;

    // Early in startup there is no Application yet
    let holder = if app.is_null() {
        env.call_method(&at, "getSystemContext", "()Landroid/app/ContextImpl;", &[])
            .and_then(|v| v.l())
            .map_err(|e| format!("getSystemContext failed: {}", e))?
    } else {
        app
    };

    env.call_method(&holder, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(|v| v.l())
        .map_err(|e| format!("getClassLoader failed: {}", e))
}

fn load_class<'a>(
    env: &mut JNIEnv<'a>,
    loader: &JObject<'a>,
    fq_slash: &str,
) -> Result<JClass<'a>, String> {
    // ClassLoader.loadClass wants dots, JNI signatures want slashes
    let name: JString = env
        .new_string(fq_slash.replace('/', "."))
        .map_err(|e| format!("new_string failed: {}", e))?;
    let cls_obj = env
        .call_method(
            loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&JObject::from(name))],
        )
        .and_then(|v| v.l())
        .map_err(|e| format!("ClassLoader.loadClass failed: {}", e))?;
    Ok(JClass::from(cls_obj))
}

fn get_activity_instance<'a>(
    env: &mut JNIEnv<'a>,
    config: &AndroidBridgeConfig,
) -> Result<(JObject<'a>, JClass<'a>), String> {
    let loader = get_app_class_loader(env)?;
    let cls = load_class(env, &loader, &config.main_activity_class)?;
    let signature = format!("()L{};", config.main_activity_class);

    let instance = match env
        .call_static_method(&cls, "getInstance", &signature, &[])
        .and_then(|v| v.l())
    {
        Ok(inst) => inst,
        Err(_) => {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            // Kotlin companion objects without @JvmStatic
            let comp_signature = format!("L{}$Companion;", config.main_activity_class);
            let companion = env
                .get_static_field(&cls, "Companion", &comp_signature)
                .and_then(|v| v.l())
                .map_err(|e| format!("Companion field not accessible: {}", e))?;
            if companion.is_null() {
                return Err("MainActivity.Companion is null - activity not initialized?".into());
            }
            env.call_method(&companion, "getInstance", &signature, &[])
                .and_then(|v| v.l())
                .map_err(|e| format!("Companion.getInstance() failed: {}", e))?
        }
    };

    if instance.is_null() {
        return Err("MainActivity instance is null - activity not initialized?".into());
    }

    Ok((instance, cls))
}

/// Attaches the current thread to the JVM and runs `f` with the activity.
pub(crate) fn with_activity<T>(
    config: &AndroidBridgeConfig,
    f: impl for<'a> FnOnce(&mut JNIEnv<'a>, &JObject<'a>, &JClass<'a>) -> Result<T, String>,
) -> Result<T, String> {
    let ctx = android_context();
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| format!("JavaVM failed: {}", e))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| format!("JNI attach failed: {}", e))?;

    let (activity, cls) = get_activity_instance(&mut env, config)?;
    f(&mut env, &activity, &cls)
}

/// Calls a static `()Ljava/lang/String;` getter and returns the value if not null
pub(crate) fn static_string(
    env: &mut JNIEnv<'_>,
    cls: &JClass<'_>,
    method: &str,
) -> Result<Option<String>, String> {
    let obj = env
        .call_static_method(cls, method, "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .map_err(|e| format!("{} failed: {}", method, e))?;
    if obj.is_null() {
        return Ok(None);
    }
    let jstr = JString::from(obj);
    let value: String = env
        .get_string(&jstr)
        .map_err(|e| format!("String conversion failed: {}", e))?
        .into();
    Ok(Some(value))
}

pub(crate) fn clear_last_error(env: &mut JNIEnv<'_>, cls: &JClass<'_>) -> Result<(), String> {
    env.call_static_method(cls, "clearLastError", "()V", &[])
        .map(|_| ())
        .map_err(|e| format!("clearLastError failed: {}", e))
}
